// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use funexpense::db::{Kv, keys};
use funexpense::models::{NewTransaction, TransactionKind, TransactionPatch};
use funexpense::stores::transactions::TransactionStore;

fn setup() -> Kv {
    Kv::open_in_memory().unwrap()
}

fn tx(amount: i64, kind: TransactionKind, category: &str, wallet: &str) -> NewTransaction {
    NewTransaction {
        amount: Decimal::from(amount),
        kind,
        category: category.to_string(),
        note: String::new(),
        date: Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
        wallet_id: wallet.to_string(),
    }
}

#[test]
fn balance_is_income_minus_expenses() {
    let kv = setup();
    let mut store = TransactionStore::load(&kv);
    store.add(&kv, tx(50, TransactionKind::Expense, "food", "w1"));
    store.add(&kv, tx(30, TransactionKind::Expense, "coffee", "w1"));
    store.add(&kv, tx(200, TransactionKind::Income, "salary", "w1"));

    assert_eq!(store.balance(None), Decimal::from(120));
    assert_eq!(store.total_expenses(None), Decimal::from(80));
    assert_eq!(store.total_income(None), Decimal::from(200));
    assert_eq!(
        store.balance(None),
        store.total_income(None) - store.total_expenses(None)
    );
}

#[test]
fn add_then_reload_round_trips_with_millisecond_dates() {
    let kv = setup();
    let mut store = TransactionStore::load(&kv);
    let mut new = tx(42, TransactionKind::Expense, "food", "w1");
    new.date = Utc.timestamp_millis_opt(1736944245123).unwrap();
    new.note = "lunch, with tip".to_string();
    let created = store.add(&kv, new);

    let reloaded = TransactionStore::load(&kv);
    assert_eq!(reloaded.all().len(), 1);
    let got = &reloaded.all()[0];
    assert_eq!(got.id, created.id);
    assert_eq!(got.amount, created.amount);
    assert_eq!(got.note, created.note);
    assert_eq!(got.date, created.date);
    assert_eq!(got.date.timestamp_millis(), 1736944245123);
}

#[test]
fn newest_addition_comes_first() {
    let kv = setup();
    let mut store = TransactionStore::load(&kv);
    let first = store.add(&kv, tx(10, TransactionKind::Expense, "food", "w1"));
    let second = store.add(&kv, tx(20, TransactionKind::Expense, "food", "w1"));
    assert_eq!(store.all()[0].id, second.id);
    assert_eq!(store.all()[1].id, first.id);
}

#[test]
fn update_merges_only_given_fields() {
    let kv = setup();
    let mut store = TransactionStore::load(&kv);
    let created = store.add(&kv, tx(10, TransactionKind::Expense, "food", "w1"));
    store.update(
        &kv,
        &created.id,
        TransactionPatch {
            amount: Some(Decimal::from(25)),
            ..Default::default()
        },
    );
    let got = store.get(&created.id).unwrap();
    assert_eq!(got.amount, Decimal::from(25));
    assert_eq!(got.category, "food");
    assert_eq!(got.kind, TransactionKind::Expense);
}

#[test]
fn update_and_delete_are_noops_for_unknown_ids() {
    let kv = setup();
    let mut store = TransactionStore::load(&kv);
    store.add(&kv, tx(10, TransactionKind::Expense, "food", "w1"));
    store.update(
        &kv,
        "missing",
        TransactionPatch {
            amount: Some(Decimal::ONE),
            ..Default::default()
        },
    );
    store.delete(&kv, "missing");
    assert_eq!(store.all().len(), 1);
    assert_eq!(store.all()[0].amount, Decimal::from(10));
}

#[test]
fn delete_removes_and_persists() {
    let kv = setup();
    let mut store = TransactionStore::load(&kv);
    let created = store.add(&kv, tx(10, TransactionKind::Expense, "food", "w1"));
    store.delete(&kv, &created.id);
    assert!(store.all().is_empty());
    assert!(TransactionStore::load(&kv).all().is_empty());
}

#[test]
fn corrupt_blob_loads_empty() {
    let kv = setup();
    kv.set_raw(keys::TRANSACTIONS, "this is not json").unwrap();
    let store = TransactionStore::load(&kv);
    assert!(store.all().is_empty());
}

#[test]
fn wallet_filter_scopes_aggregates() {
    let kv = setup();
    let mut store = TransactionStore::load(&kv);
    store.add(&kv, tx(100, TransactionKind::Income, "salary", "w1"));
    store.add(&kv, tx(40, TransactionKind::Expense, "food", "w1"));
    store.add(&kv, tx(500, TransactionKind::Income, "salary", "w2"));

    assert_eq!(store.balance(Some("w1")), Decimal::from(60));
    assert_eq!(store.balance(Some("w2")), Decimal::from(500));
    assert_eq!(store.balance(None), Decimal::from(560));
    assert_eq!(store.for_wallet("w2").len(), 1);
}

#[test]
fn month_filter_matches_the_calendar_month() {
    let kv = setup();
    let mut store = TransactionStore::load(&kv);
    let mut january = tx(10, TransactionKind::Expense, "food", "w1");
    january.date = Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap();
    let mut february = tx(20, TransactionKind::Expense, "food", "w1");
    february.date = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
    store.add(&kv, january);
    store.add(&kv, february);

    let hits = store.in_month("2025-01");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].amount, Decimal::from(10));
}

#[test]
fn category_totals_sorted_with_shares() {
    let kv = setup();
    let mut store = TransactionStore::load(&kv);
    store.add(&kv, tx(25, TransactionKind::Expense, "transport", "w1"));
    store.add(&kv, tx(75, TransactionKind::Expense, "food", "w1"));
    store.add(&kv, tx(999, TransactionKind::Income, "salary", "w1"));

    let totals = store.category_totals(TransactionKind::Expense, None);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].name, "Food");
    assert_eq!(totals[0].value, Decimal::from(75));
    assert_eq!(totals[0].share, Decimal::from(75));
    assert_eq!(totals[1].name, "Transport");
    assert_eq!(totals[1].share, Decimal::from(25));
}

#[test]
fn category_totals_keep_unknown_ids() {
    let kv = setup();
    let mut store = TransactionStore::load(&kv);
    store.add(&kv, tx(10, TransactionKind::Expense, "retired-category", "w1"));
    let totals = store.category_totals(TransactionKind::Expense, None);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].name, "retired-category");
    assert_eq!(totals[0].color, "#B0B0B0");
}
