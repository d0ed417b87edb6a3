// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use funexpense::api::Client;
use funexpense::db::{Kv, keys};
use funexpense::models::{Wallet, WalletPatch};
use funexpense::stores::wallets::WalletStore;

fn setup() -> Kv {
    Kv::open_in_memory().unwrap()
}

fn wallet(id: &str) -> Wallet {
    Wallet {
        id: id.to_string(),
        name: format!("Wallet {}", id),
        emoji: "💳".to_string(),
        currency: "USD".to_string(),
    }
}

fn seed(kv: &Kv, ids: &[&str], selected: Option<&str>) {
    let list: Vec<Wallet> = ids.iter().map(|id| wallet(id)).collect();
    kv.set_json(keys::WALLETS, &list).unwrap();
    if let Some(id) = selected {
        kv.set_raw(keys::SELECTED_WALLET, id).unwrap();
    }
}

#[test]
fn first_load_synthesizes_and_selects_a_default_wallet() {
    let kv = setup();
    let store = WalletStore::load(&kv);
    assert_eq!(store.all().len(), 1);
    assert_eq!(store.all()[0].name, "Main Wallet");
    assert_eq!(store.selected().unwrap().id, store.all()[0].id);

    // Persisted, not re-synthesized on the next load.
    let again = WalletStore::load(&kv);
    assert_eq!(again.all()[0].id, store.all()[0].id);
}

#[test]
fn missing_pointer_selects_first_wallet() {
    let kv = setup();
    seed(&kv, &["a", "b"], None);
    let store = WalletStore::load(&kv);
    assert_eq!(store.selected().unwrap().id, "a");
    assert_eq!(kv.get_raw(keys::SELECTED_WALLET).unwrap().unwrap(), "a");
}

#[test]
fn deleting_the_last_wallet_is_rejected() {
    let kv = setup();
    seed(&kv, &["a"], Some("a"));
    let mut store = WalletStore::load(&kv);
    assert!(!store.delete(&kv, "a"));
    assert_eq!(store.all().len(), 1);
    assert_eq!(WalletStore::load(&kv).all().len(), 1);
}

#[test]
fn deleting_the_selected_wallet_falls_back_to_first() {
    let kv = setup();
    seed(&kv, &["a", "b"], Some("a"));
    let mut store = WalletStore::load(&kv);
    assert!(store.delete(&kv, "a"));
    assert_eq!(store.all().len(), 1);
    assert_eq!(store.all()[0].id, "b");
    assert_eq!(store.selected().unwrap().id, "b");
    assert_eq!(kv.get_raw(keys::SELECTED_WALLET).unwrap().unwrap(), "b");
}

#[test]
fn deleting_an_unselected_wallet_keeps_selection() {
    let kv = setup();
    seed(&kv, &["a", "b"], Some("a"));
    let mut store = WalletStore::load(&kv);
    assert!(store.delete(&kv, "b"));
    assert_eq!(store.selected().unwrap().id, "a");
}

#[test]
fn delete_unknown_id_is_noop() {
    let kv = setup();
    seed(&kv, &["a", "b"], Some("a"));
    let mut store = WalletStore::load(&kv);
    assert!(!store.delete(&kv, "zzz"));
    assert_eq!(store.all().len(), 2);
}

#[test]
fn update_merges_only_given_fields() {
    let kv = setup();
    seed(&kv, &["a"], Some("a"));
    let mut store = WalletStore::load(&kv);
    store.update(
        &kv,
        "a",
        WalletPatch {
            name: Some("Travel".to_string()),
            ..Default::default()
        },
    );
    let got = store.get("a").unwrap();
    assert_eq!(got.name, "Travel");
    assert_eq!(got.currency, "USD");
    assert_eq!(WalletStore::load(&kv).get("a").unwrap().name, "Travel");
}

#[test]
fn select_moves_and_persists_the_pointer() {
    let kv = setup();
    seed(&kv, &["a", "b"], Some("a"));
    let mut store = WalletStore::load(&kv);
    store.select(&kv, "b");
    assert_eq!(store.selected().unwrap().id, "b");
    assert_eq!(kv.get_raw(keys::SELECTED_WALLET).unwrap().unwrap(), "b");
}

#[test]
fn create_caches_the_server_record() {
    let kv = setup();
    seed(&kv, &["a"], Some("a"));
    let server = common::one_shot(
        200,
        r#"{"wallet":{"id":"srv-9","name":"Trip","emoji":"🎯","currency":"EUR"}}"#,
    );
    let client = Client::new(server.base_url.clone()).unwrap();

    let mut store = WalletStore::load(&kv);
    let created = store.create(&kv, &client, "Trip", "🎯", "cur-eur").unwrap();
    assert_eq!(created.id, "srv-9");
    assert_eq!(store.all().len(), 2);
    assert_eq!(WalletStore::load(&kv).get("srv-9").unwrap().name, "Trip");

    let request = server.request();
    assert!(request.starts_with("POST /v1/wallets"));
    assert!(request.contains("\"currencyId\":\"cur-eur\""));
}

#[test]
fn create_failure_leaves_local_state_untouched() {
    let kv = setup();
    seed(&kv, &["a"], Some("a"));
    let server = common::one_shot(500, r#"{"message":"wallet limit reached"}"#);
    let client = Client::new(server.base_url.clone()).unwrap();

    let mut store = WalletStore::load(&kv);
    let err = store.create(&kv, &client, "Trip", "🎯", "cur-eur").unwrap_err();
    assert_eq!(err.to_string(), "wallet limit reached");
    assert_eq!(store.all().len(), 1);
    assert_eq!(WalletStore::load(&kv).all().len(), 1);
}
