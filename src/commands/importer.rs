// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use csv::ReaderBuilder;

use crate::commands::transactions::check_category;
use crate::db::Kv;
use crate::models::NewTransaction;
use crate::stores::transactions::TransactionStore;
use crate::stores::wallets::WalletStore;
use crate::utils::{parse_amount, parse_date, parse_kind};

pub fn handle(kv: &Kv, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(kv, sub),
        _ => Ok(()),
    }
}

/// CSV columns: date, type, category, amount, note, wallet. The wallet
/// column may be empty; `--wallet` (or the selected wallet) fills it in.
/// Every row is validated before anything is written, so a bad row imports
/// nothing.
fn import_transactions(kv: &Kv, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let wallets = WalletStore::load(kv);
    let fallback_wallet = sub
        .get_one::<String>("wallet")
        .cloned()
        .or_else(|| wallets.selected().map(|w| w.id.clone()));

    let mut pending = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let line = i + 2; // header is line 1
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let kind_raw = rec.get(1).context("type missing")?.trim();
        let category = rec.get(2).context("category missing")?.trim().to_string();
        let amount_raw = rec.get(3).context("amount missing")?.trim();
        let note = rec.get(4).unwrap_or("").trim().to_string();
        let wallet_raw = rec.get(5).unwrap_or("").trim();

        let date = parse_row_date(date_raw)
            .with_context(|| format!("Line {}: invalid date '{}'", line, date_raw))?;
        let kind = parse_kind(kind_raw).with_context(|| format!("Line {}", line))?;
        check_category(&category, kind).with_context(|| format!("Line {}", line))?;
        let amount = parse_amount(amount_raw).with_context(|| format!("Line {}", line))?;
        let wallet_id = if wallet_raw.is_empty() {
            fallback_wallet
                .clone()
                .ok_or_else(|| anyhow!("Line {}: no wallet and none selected", line))?
        } else {
            wallet_raw.to_string()
        };

        pending.push(NewTransaction {
            amount,
            kind,
            category,
            note,
            date,
            wallet_id,
        });
    }

    let count = pending.len();
    let mut store = TransactionStore::load(kv);
    for new in pending {
        store.add(kv, new);
    }
    println!("Imported {} transactions from {}", count, path);
    Ok(())
}

fn parse_row_date(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Ok(d.with_timezone(&Utc));
    }
    parse_date(s)
}
