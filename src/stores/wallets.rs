// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{ApiError, Client};
use crate::catalog::{DEFAULT_WALLET_CURRENCY, DEFAULT_WALLET_EMOJI, DEFAULT_WALLET_NAME};
use crate::db::{Kv, keys};
use crate::models::{Wallet, WalletPatch};
use crate::utils::fresh_id;

/// Owns the wallet list and the selected-wallet pointer. Creation goes
/// through the remote service (the server assigns ids); everything else is
/// local. At least one wallet exists at all times.
pub struct WalletStore {
    items: Vec<Wallet>,
    selected: Option<String>,
}

impl WalletStore {
    /// Reads the list and the selection pointer. An empty store synthesizes
    /// one default wallet and selects it; a list without a recorded selection
    /// selects the first wallet. Read errors log and start empty.
    pub fn load(kv: &Kv) -> Self {
        let mut items = match kv.get_json::<Vec<Wallet>>(keys::WALLETS) {
            Ok(Some(list)) => list,
            Ok(None) => Vec::new(),
            Err(err) => {
                eprintln!("Error loading wallets: {:#}", err);
                Vec::new()
            }
        };
        let mut selected = match kv.get_raw(keys::SELECTED_WALLET) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("Error loading selected wallet: {:#}", err);
                None
            }
        };
        if items.is_empty() {
            let wallet = Wallet {
                id: fresh_id(),
                name: DEFAULT_WALLET_NAME.to_string(),
                emoji: DEFAULT_WALLET_EMOJI.to_string(),
                currency: DEFAULT_WALLET_CURRENCY.to_string(),
            };
            items.push(wallet);
            persist_list(kv, &items);
            let first = items[0].id.clone();
            persist_selected(kv, &first);
            selected = Some(first);
        } else if selected.is_none() {
            let first = items[0].id.clone();
            persist_selected(kv, &first);
            selected = Some(first);
        }
        WalletStore { items, selected }
    }

    pub fn all(&self) -> &[Wallet] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Wallet> {
        self.items.iter().find(|w| w.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The wallet the pointer names, if it still exists.
    pub fn selected(&self) -> Option<&Wallet> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Moves the pointer. The id is not checked against the list; callers
    /// decide whether a dangling selection is worth preventing.
    pub fn select(&mut self, kv: &Kv, id: &str) {
        self.selected = Some(id.to_string());
        persist_selected(kv, id);
    }

    /// Remote-first create: the server assigns the id, then the returned
    /// record is cached locally. A remote failure propagates and leaves local
    /// state untouched; a local write failure after the remote create is
    /// logged only.
    pub fn create(
        &mut self,
        kv: &Kv,
        client: &Client,
        name: &str,
        emoji: &str,
        currency_id: &str,
    ) -> Result<Wallet, ApiError> {
        let wallet = client.create_wallet(kv, name, emoji, currency_id)?;
        self.items.push(wallet.clone());
        persist_list(kv, &self.items);
        Ok(wallet)
    }

    /// Local-only merge. No-op when the id is unknown.
    pub fn update(&mut self, kv: &Kv, id: &str, patch: WalletPatch) {
        let Some(wallet) = self.items.iter_mut().find(|w| w.id == id) else {
            return;
        };
        if let Some(name) = patch.name {
            wallet.name = name;
        }
        if let Some(emoji) = patch.emoji {
            wallet.emoji = emoji;
        }
        if let Some(currency) = patch.currency {
            wallet.currency = currency;
        }
        persist_list(kv, &self.items);
    }

    /// Removes the wallet and returns whether anything changed. Deleting the
    /// last remaining wallet is rejected; deleting the selected one moves the
    /// pointer to the first wallet left.
    pub fn delete(&mut self, kv: &Kv, id: &str) -> bool {
        if !self.items.iter().any(|w| w.id == id) {
            return false;
        }
        if self.items.len() == 1 {
            eprintln!("Cannot delete the last wallet");
            return false;
        }
        self.items.retain(|w| w.id != id);
        persist_list(kv, &self.items);
        if self.selected.as_deref() == Some(id) {
            let first = self.items[0].id.clone();
            persist_selected(kv, &first);
            self.selected = Some(first);
        }
        true
    }
}

fn persist_list(kv: &Kv, items: &[Wallet]) {
    if let Err(err) = kv.set_json(keys::WALLETS, &items) {
        eprintln!("Error saving wallets: {:#}", err);
    }
}

fn persist_selected(kv: &Kv, id: &str) {
    if let Err(err) = kv.set_raw(keys::SELECTED_WALLET, id) {
        eprintln!("Error saving selected wallet: {:#}", err);
    }
}
