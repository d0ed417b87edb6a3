// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use funexpense::api::Client;
use funexpense::db::{Kv, keys};
use funexpense::session::{Screen, Session};

fn setup() -> Kv {
    Kv::open_in_memory().unwrap()
}

const VERIFY_OK: &str = r#"{
    "user": {
        "id": "u1",
        "name": "Ada",
        "email": "ada@example.com",
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z"
    },
    "token": { "access": "acc-1", "refresh": "ref-1" }
}"#;

#[test]
fn fresh_session_gates_to_onboarding() {
    let kv = setup();
    let session = Session::load(&kv);
    assert_eq!(session.gate(), Screen::Onboarding);
    assert!(!session.is_authenticated());
}

#[test]
fn onboarding_completion_gates_to_login() {
    let kv = setup();
    let mut session = Session::load(&kv);
    session.complete_onboarding(&kv);
    assert_eq!(session.gate(), Screen::Login);
    assert_eq!(kv.get_raw(keys::ONBOARDING).unwrap().unwrap(), "true");

    // And the flag survives a restart.
    assert_eq!(Session::load(&kv).gate(), Screen::Login);
}

#[test]
fn verify_otp_persists_tokens_and_gates_home() {
    let kv = setup();
    let mut session = Session::load(&kv);
    session.complete_onboarding(&kv);

    let server = common::one_shot(200, VERIFY_OK);
    let client = Client::new(server.base_url.clone()).unwrap();
    session
        .verify_otp(&kv, &client, "ada@example.com", "123456")
        .unwrap();

    assert_eq!(session.gate(), Screen::Home);
    assert_eq!(session.user().unwrap().name, "Ada");
    assert_eq!(kv.get_raw(keys::AUTH_TOKEN).unwrap().unwrap(), "acc-1");
    assert_eq!(kv.get_raw(keys::REFRESH_TOKEN).unwrap().unwrap(), "ref-1");
    assert!(kv.get_raw(keys::USER).unwrap().is_some());

    let request = server.request();
    assert!(request.starts_with("POST /v1/auth/verify-otp"));

    // A restart sees the same authenticated session.
    assert_eq!(Session::load(&kv).gate(), Screen::Home);
}

#[test]
fn incorrect_otp_message_is_rewritten() {
    let kv = setup();
    let mut session = Session::load(&kv);
    let server = common::one_shot(400, r#"{"message":"Incorrect OTP"}"#);
    let client = Client::new(server.base_url.clone()).unwrap();
    let err = session
        .verify_otp(&kv, &client, "ada@example.com", "000000")
        .unwrap_err();
    assert_eq!(err, "Incorrect OTP. Please try again.");
    assert!(!session.is_authenticated());
}

#[test]
fn expired_otp_message_is_rewritten() {
    let kv = setup();
    let mut session = Session::load(&kv);
    let server = common::one_shot(400, r#"{"message":"OTP not found or expired"}"#);
    let client = Client::new(server.base_url.clone()).unwrap();
    let err = session
        .verify_otp(&kv, &client, "ada@example.com", "000000")
        .unwrap_err();
    assert_eq!(err, "OTP has expired. Please request a new one.");
}

#[test]
fn unrecognized_server_message_passes_through() {
    let kv = setup();
    let mut session = Session::load(&kv);
    let server = common::one_shot(400, r#"{"message":"Account locked"}"#);
    let client = Client::new(server.base_url.clone()).unwrap();
    let err = session
        .verify_otp(&kv, &client, "ada@example.com", "000000")
        .unwrap_err();
    assert_eq!(err, "Account locked");
}

#[test]
fn missing_message_gets_the_generic_fallback() {
    let kv = setup();
    let mut session = Session::load(&kv);
    let server = common::one_shot(500, "{}");
    let client = Client::new(server.base_url.clone()).unwrap();
    let err = session
        .verify_otp(&kv, &client, "ada@example.com", "000000")
        .unwrap_err();
    assert_eq!(err, "Failed to verify OTP. Please try again.");
}

#[test]
fn send_otp_has_no_local_state_effect() {
    let kv = setup();
    let session = Session::load(&kv);
    let server = common::one_shot(200, r#"{"message":"OTP sent"}"#);
    let client = Client::new(server.base_url.clone()).unwrap();
    session.send_otp(&kv, &client, "ada@example.com").unwrap();
    assert_eq!(session.gate(), Screen::Onboarding);
    assert!(kv.get_raw(keys::AUTH_TOKEN).unwrap().is_none());
}

#[test]
fn send_otp_failure_carries_the_server_message() {
    let kv = setup();
    let session = Session::load(&kv);
    let server = common::one_shot(429, r#"{"message":"Too many requests"}"#);
    let client = Client::new(server.base_url.clone()).unwrap();
    let err = session
        .send_otp(&kv, &client, "ada@example.com")
        .unwrap_err();
    assert_eq!(err, "Too many requests");
}

#[test]
fn logout_clears_every_session_key() {
    let kv = setup();
    let mut session = Session::load(&kv);
    session.complete_onboarding(&kv);

    let server = common::one_shot(200, VERIFY_OK);
    let client = Client::new(server.base_url.clone()).unwrap();
    session
        .verify_otp(&kv, &client, "ada@example.com", "123456")
        .unwrap();

    session.logout(&kv).unwrap();
    assert_eq!(session.gate(), Screen::Onboarding);
    assert!(session.user().is_none());
    for key in [
        keys::AUTH_TOKEN,
        keys::REFRESH_TOKEN,
        keys::USER,
        keys::ONBOARDING,
    ] {
        assert!(kv.get_raw(key).unwrap().is_none(), "{} not cleared", key);
    }
}
