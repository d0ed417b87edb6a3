// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::catalog;
use crate::db::Kv;
use crate::stores::transactions::TransactionStore;
use crate::stores::wallets::WalletStore;
use crate::utils::pretty_table;

pub fn handle(kv: &Kv) -> Result<()> {
    let issues = audit(kv);
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|(issue, detail)| vec![issue, detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Walks the local store looking for the inconsistencies nothing else
/// prevents: a dangling selection pointer, transactions pointing at deleted
/// wallets, category ids the catalog no longer knows, and amounts that are
/// not positive.
pub fn audit(kv: &Kv) -> Vec<(String, String)> {
    let wallets = WalletStore::load(kv);
    let store = TransactionStore::load(kv);
    let mut issues = Vec::new();

    if let Some(id) = wallets.selected_id() {
        if wallets.get(id).is_none() {
            issues.push(("dangling_selection".to_string(), id.to_string()));
        }
    }

    for t in store.all() {
        if wallets.get(&t.wallet_id).is_none() {
            issues.push((
                "dangling_wallet".to_string(),
                format!("{} -> {}", t.id, t.wallet_id),
            ));
        }
        if catalog::category_by_id(&t.category).is_none() {
            issues.push((
                "unknown_category".to_string(),
                format!("{} -> {}", t.id, t.category),
            ));
        }
        if t.amount <= Decimal::ZERO {
            issues.push((
                "non_positive_amount".to_string(),
                format!("{} -> {}", t.id, t.amount),
            ));
        }
    }
    issues
}
