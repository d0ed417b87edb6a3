// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::catalog;
use crate::db::{Kv, keys};
use crate::models::{NewTransaction, Transaction, TransactionKind, TransactionPatch};
use crate::utils::{fresh_id, month_key};

/// Owns the transaction list. Loaded once per command, mutated in memory,
/// written back whole on every mutation; aggregates rescan the list.
pub struct TransactionStore {
    items: Vec<Transaction>,
}

impl TransactionStore {
    /// Fail-soft: a missing key starts empty, a broken blob logs and starts
    /// empty. Never an error for the caller.
    pub fn load(kv: &Kv) -> Self {
        let items = match kv.get_json::<Vec<Transaction>>(keys::TRANSACTIONS) {
            Ok(Some(list)) => list,
            Ok(None) => Vec::new(),
            Err(err) => {
                eprintln!("Error loading transactions: {:#}", err);
                Vec::new()
            }
        };
        TransactionStore { items }
    }

    pub fn all(&self) -> &[Transaction] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Newest-first prepend. The record lands in memory even when the write
    /// fails; the failure is logged only.
    pub fn add(&mut self, kv: &Kv, new: NewTransaction) -> Transaction {
        let tx = Transaction {
            id: fresh_id(),
            amount: new.amount,
            kind: new.kind,
            category: new.category,
            note: new.note,
            date: new.date,
            wallet_id: new.wallet_id,
        };
        self.items.insert(0, tx.clone());
        self.persist(kv);
        tx
    }

    /// Merges the provided fields into the matching record. No-op when the
    /// id is unknown.
    pub fn update(&mut self, kv: &Kv, id: &str, patch: TransactionPatch) {
        let Some(tx) = self.items.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if let Some(amount) = patch.amount {
            tx.amount = amount;
        }
        if let Some(kind) = patch.kind {
            tx.kind = kind;
        }
        if let Some(category) = patch.category {
            tx.category = category;
        }
        if let Some(note) = patch.note {
            tx.note = note;
        }
        if let Some(date) = patch.date {
            tx.date = date;
        }
        if let Some(wallet_id) = patch.wallet_id {
            tx.wallet_id = wallet_id;
        }
        self.persist(kv);
    }

    pub fn delete(&mut self, kv: &Kv, id: &str) {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() != before {
            self.persist(kv);
        }
    }

    pub fn balance(&self, wallet: Option<&str>) -> Decimal {
        self.scoped(wallet).fold(Decimal::ZERO, |acc, t| match t.kind {
            TransactionKind::Income => acc + t.amount,
            TransactionKind::Expense => acc - t.amount,
        })
    }

    pub fn total_income(&self, wallet: Option<&str>) -> Decimal {
        self.sum_of(TransactionKind::Income, wallet)
    }

    pub fn total_expenses(&self, wallet: Option<&str>) -> Decimal {
        self.sum_of(TransactionKind::Expense, wallet)
    }

    pub fn for_wallet(&self, wallet: &str) -> Vec<&Transaction> {
        self.items.iter().filter(|t| t.wallet_id == wallet).collect()
    }

    pub fn in_month(&self, month: &str) -> Vec<&Transaction> {
        self.items
            .iter()
            .filter(|t| month_key(&t.date) == month)
            .collect()
    }

    /// Per-category sums for one side of the ledger, enriched from the
    /// catalog and sorted largest-first, with each row's share of the total.
    /// Ids the catalog no longer knows keep their raw id and a gray color.
    pub fn category_totals(
        &self,
        kind: TransactionKind,
        wallet: Option<&str>,
    ) -> Vec<CategoryTotal> {
        let mut grouped: HashMap<&str, Decimal> = HashMap::new();
        for t in self.scoped(wallet).filter(|t| t.kind == kind) {
            *grouped.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.amount;
        }
        let total: Decimal = grouped.values().copied().sum();
        let mut rows: Vec<CategoryTotal> = grouped
            .into_iter()
            .map(|(id, value)| {
                let share = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    (value / total * Decimal::ONE_HUNDRED).round_dp(1)
                };
                match catalog::category_by_id(id) {
                    Some(cat) => CategoryTotal {
                        name: cat.name.to_string(),
                        emoji: cat.emoji.to_string(),
                        value,
                        color: cat.color.to_string(),
                        share,
                    },
                    None => CategoryTotal {
                        name: id.to_string(),
                        emoji: "📦".to_string(),
                        value,
                        color: catalog::UNKNOWN_CATEGORY_COLOR.to_string(),
                        share,
                    },
                }
            })
            .collect();
        rows.sort_by(|a, b| b.value.cmp(&a.value));
        rows
    }

    fn sum_of(&self, kind: TransactionKind, wallet: Option<&str>) -> Decimal {
        self.scoped(wallet)
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    fn scoped<'a>(&'a self, wallet: Option<&'a str>) -> impl Iterator<Item = &'a Transaction> {
        self.items
            .iter()
            .filter(move |t| wallet.is_none_or(|w| t.wallet_id == w))
    }

    fn persist(&self, kv: &Kv) {
        if let Err(err) = kv.set_json(keys::TRANSACTIONS, &self.items) {
            eprintln!("Error saving transactions: {:#}", err);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub emoji: String,
    pub value: Decimal,
    pub color: String,
    /// Percent of this kind's total, one decimal place.
    pub share: Decimal,
}
