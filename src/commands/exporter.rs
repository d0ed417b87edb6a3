// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::db::Kv;
use crate::stores::transactions::TransactionStore;

pub fn handle(kv: &Kv, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(kv, sub),
        _ => Ok(()),
    }
}

fn export_transactions(kv: &Kv, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let store = TransactionStore::load(kv);
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "type", "category", "amount", "note", "wallet"])?;
            // Oldest first, so a later import rebuilds the same newest-first list.
            for t in store.all().iter().rev() {
                let date = t.date.to_rfc3339();
                let amount = t.amount.to_string();
                wtr.write_record([
                    date.as_str(),
                    t.kind.as_str(),
                    t.category.as_str(),
                    amount.as_str(),
                    t.note.as_str(),
                    t.wallet_id.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&store.all())?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
