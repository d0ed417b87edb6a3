// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow, bail};
use chrono::Utc;
use serde::Serialize;

use crate::catalog;
use crate::db::Kv;
use crate::models::{NewTransaction, TransactionKind, TransactionPatch};
use crate::stores::settings::SettingsStore;
use crate::stores::transactions::TransactionStore;
use crate::stores::wallets::WalletStore;
use crate::utils::{
    fmt_amount, maybe_print_json, month_key, parse_amount, parse_date, parse_kind, parse_month,
    pretty_table,
};

pub fn handle(kv: &Kv, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(kv, sub)?,
        Some(("list", sub)) => list(kv, sub)?,
        Some(("edit", sub)) => edit(kv, sub)?,
        Some(("rm", sub)) => rm(kv, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(kv: &Kv, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    check_category(&category, kind)?;
    let note = sub.get_one::<String>("note").unwrap().to_string();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Utc::now(),
    };
    let wallet_id = match sub.get_one::<String>("wallet") {
        Some(id) => id.to_string(),
        None => {
            let wallets = WalletStore::load(kv);
            wallets
                .selected()
                .map(|w| w.id.clone())
                .ok_or_else(|| anyhow!("No wallet selected; pass --wallet"))?
        }
    };

    let mut store = TransactionStore::load(kv);
    let tx = store.add(
        kv,
        NewTransaction {
            amount,
            kind,
            category,
            note,
            date,
            wallet_id,
        },
    );
    println!(
        "Recorded {} of {} ({}) with id {}",
        tx.kind, tx.amount, tx.category, tx.id
    );
    Ok(())
}

fn list(kv: &Kv, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(kv, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.note.clone(),
                    r.wallet.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Category", "Amount", "Note", "Wallet"],
                rows,
            )
        );
    }
    Ok(())
}

fn edit(kv: &Kv, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut store = TransactionStore::load(kv);
    let Some(current) = store.get(id) else {
        println!("No transaction with id {}", id);
        return Ok(());
    };
    let kind = match sub.get_one::<String>("type") {
        Some(t) => parse_kind(t)?,
        None => current.kind,
    };
    if let Some(category) = sub.get_one::<String>("category") {
        check_category(category, kind)?;
    }
    let patch = TransactionPatch {
        amount: sub
            .get_one::<String>("amount")
            .map(|a| parse_amount(a))
            .transpose()?,
        kind: sub.get_one::<String>("type").map(|_| kind),
        category: sub.get_one::<String>("category").cloned(),
        note: sub.get_one::<String>("note").cloned(),
        date: sub
            .get_one::<String>("date")
            .map(|d| parse_date(d))
            .transpose()?,
        wallet_id: sub.get_one::<String>("wallet").cloned(),
    };
    store.update(kv, id, patch);
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(kv: &Kv, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut store = TransactionStore::load(kv);
    if store.get(id).is_none() {
        println!("No transaction with id {}", id);
        return Ok(());
    }
    store.delete(kv, id);
    println!("Removed transaction {}", id);
    Ok(())
}

pub fn check_category(id: &str, kind: TransactionKind) -> Result<()> {
    let Some(cat) = catalog::category_by_id(id) else {
        bail!("Unknown category '{}'; see 'funexpense categories list'", id);
    };
    if cat.kind != kind {
        bail!(
            "Category '{}' is for {} transactions, not {}",
            id,
            cat.kind,
            kind
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub note: String,
    pub wallet: String,
}

/// Newest-first rows for `tx list`, after the month/wallet/limit filters.
/// Expenses render with a leading minus; the symbol comes from settings.
pub fn query_rows(kv: &Kv, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = sub
        .get_one::<String>("month")
        .map(|m| parse_month(m))
        .transpose()?;
    let wallet = sub.get_one::<String>("wallet").cloned();
    let limit = sub.get_one::<usize>("limit").copied();

    let store = TransactionStore::load(kv);
    let symbol = SettingsStore::load(kv).get().currency_symbol.clone();

    let mut data = Vec::new();
    for t in store
        .all()
        .iter()
        .filter(|t| month.as_ref().is_none_or(|m| &month_key(&t.date) == m))
        .filter(|t| wallet.as_ref().is_none_or(|w| &t.wallet_id == w))
    {
        let signed = match t.kind {
            TransactionKind::Expense => -t.amount,
            TransactionKind::Income => t.amount,
        };
        data.push(TransactionRow {
            id: t.id.clone(),
            date: t.date.format("%Y-%m-%d").to_string(),
            kind: t.kind.to_string(),
            category: t.category.clone(),
            amount: fmt_amount(&signed, &symbol),
            note: t.note.clone(),
            wallet: t.wallet_id.clone(),
        });
        if limit.is_some_and(|l| data.len() >= l) {
            break;
        }
    }
    Ok(data)
}
