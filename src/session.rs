// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::api::{ApiError, Client};
use crate::db::{Kv, keys};
use crate::models::User;

/// Where the app routes a user given the current session:
/// onboarding incomplete, signed out, or fully in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Login,
    Home,
}

/// Authentication and onboarding state, loaded once at startup and passed
/// down explicitly. Populated by OTP verification, cleared by logout.
pub struct Session {
    token: Option<String>,
    refresh: Option<String>,
    user: Option<User>,
    onboarded: bool,
}

impl Session {
    /// Fail-soft load: any unreadable key logs and counts as absent, leaving
    /// the session unauthenticated.
    pub fn load(kv: &Kv) -> Self {
        let token = read_key(kv, keys::AUTH_TOKEN);
        let refresh = read_key(kv, keys::REFRESH_TOKEN);
        let user = match kv.get_json::<User>(keys::USER) {
            Ok(u) => u,
            Err(err) => {
                eprintln!("Error loading session user: {:#}", err);
                None
            }
        };
        let onboarded = read_key(kv, keys::ONBOARDING).as_deref() == Some("true");
        Session {
            token,
            refresh,
            user,
            onboarded,
        }
    }

    pub fn gate(&self) -> Screen {
        if !self.onboarded {
            Screen::Onboarding
        } else if self.token.is_none() {
            Screen::Login
        } else {
            Screen::Home
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn has_refresh_token(&self) -> bool {
        self.refresh.is_some()
    }

    pub fn onboarding_complete(&self) -> bool {
        self.onboarded
    }

    /// Requests an OTP email. No local state changes either way; the error
    /// string is ready to show the user.
    pub fn send_otp(&self, kv: &Kv, client: &Client, email: &str) -> Result<(), String> {
        match client.send_otp(kv, email) {
            Ok(_) => Ok(()),
            Err(ApiError::Status {
                message: Some(msg), ..
            }) => Err(msg),
            Err(_) => Err("Failed to send OTP. Please try again.".to_string()),
        }
    }

    /// Exchanges the code for a token pair and profile, persists all three,
    /// and flips to authenticated. Known server error strings are rewritten
    /// to friendlier text; unknown ones pass through verbatim.
    pub fn verify_otp(
        &mut self,
        kv: &Kv,
        client: &Client,
        email: &str,
        otp: &str,
    ) -> Result<(), String> {
        let resp = match client.verify_otp(kv, email, otp) {
            Ok(r) => r,
            Err(ApiError::Status {
                message: Some(msg), ..
            }) => return Err(map_otp_error(msg)),
            Err(_) => return Err("Failed to verify OTP. Please try again.".to_string()),
        };
        if let Err(err) = kv.set_raw(keys::AUTH_TOKEN, &resp.token.access) {
            eprintln!("Error saving auth token: {:#}", err);
        }
        if let Err(err) = kv.set_raw(keys::REFRESH_TOKEN, &resp.token.refresh) {
            eprintln!("Error saving refresh token: {:#}", err);
        }
        if let Err(err) = kv.set_json(keys::USER, &resp.user) {
            eprintln!("Error saving user: {:#}", err);
        }
        self.token = Some(resp.token.access);
        self.refresh = Some(resp.token.refresh);
        self.user = Some(resp.user);
        Ok(())
    }

    pub fn complete_onboarding(&mut self, kv: &Kv) {
        if let Err(err) = kv.set_raw(keys::ONBOARDING, "true") {
            eprintln!("Error saving onboarding flag: {:#}", err);
        }
        self.onboarded = true;
    }

    /// Clears every session key. Unlike the stores, a storage failure here
    /// propagates: a half-cleared session is worth telling the user about.
    pub fn logout(&mut self, kv: &Kv) -> Result<()> {
        for key in [
            keys::AUTH_TOKEN,
            keys::REFRESH_TOKEN,
            keys::USER,
            keys::ONBOARDING,
        ] {
            kv.remove(key)
                .with_context(|| format!("Clear session key '{}'", key))?;
        }
        self.token = None;
        self.refresh = None;
        self.user = None;
        self.onboarded = false;
        Ok(())
    }
}

fn read_key(kv: &Kv, key: &str) -> Option<String> {
    match kv.get_raw(key) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("Error reading '{}': {:#}", key, err);
            None
        }
    }
}

fn map_otp_error(msg: String) -> String {
    match msg.as_str() {
        "OTP not found or expired" => "OTP has expired. Please request a new one.".to_string(),
        "Incorrect OTP" => "Incorrect OTP. Please try again.".to_string(),
        _ => msg,
    }
}
