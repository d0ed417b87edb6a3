// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::Kv;
use crate::stores::transactions::TransactionStore;
use crate::stores::wallets::WalletStore;
use crate::utils::{fmt_money, maybe_print_json, parse_kind, pretty_table};

pub fn handle(kv: &Kv, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(kv, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(kv, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct Summary {
    pub wallet: String,
    pub currency: String,
    pub balance: Decimal,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Balance, income, and expenses for one wallet. Without `--wallet` the
/// selected wallet is reported, as on the original home screen.
pub fn wallet_summary(kv: &Kv, wallet_id: Option<&str>) -> Result<Summary> {
    let wallets = WalletStore::load(kv);
    let wallet = match wallet_id {
        Some(id) => wallets
            .get(id)
            .ok_or_else(|| anyhow!("No wallet with id {}", id))?,
        None => wallets
            .selected()
            .ok_or_else(|| anyhow!("No wallet selected; pass --wallet"))?,
    };
    let store = TransactionStore::load(kv);
    let scope = Some(wallet.id.as_str());
    Ok(Summary {
        wallet: format!("{} {}", wallet.emoji, wallet.name),
        currency: wallet.currency.clone(),
        balance: store.balance(scope),
        income: store.total_income(scope),
        expenses: store.total_expenses(scope),
    })
}

fn summary(kv: &Kv, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = wallet_summary(kv, sub.get_one::<String>("wallet").map(|w| w.as_str()))?;
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec!["Balance".to_string(), fmt_money(&s.balance, &s.currency)],
            vec!["Income".to_string(), fmt_money(&s.income, &s.currency)],
            vec!["Expenses".to_string(), fmt_money(&s.expenses, &s.currency)],
        ];
        println!("{}", s.wallet);
        println!("{}", pretty_table(&["", s.currency.as_str()], rows));
    }
    Ok(())
}

fn spend_by_category(kv: &Kv, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let wallet = sub.get_one::<String>("wallet").map(|w| w.as_str());

    let store = TransactionStore::load(kv);
    let totals = store.category_totals(kind, wallet);
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows: Vec<Vec<String>> = totals
            .iter()
            .map(|c| {
                vec![
                    format!("{} {}", c.emoji, c.name),
                    c.value.round_dp(2).to_string(),
                    format!("{}%", c.share),
                    c.color.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Total", "Share", "Color"], rows));
    }
    Ok(())
}
