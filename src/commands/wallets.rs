// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow, bail};

use crate::api::Client;
use crate::catalog;
use crate::db::Kv;
use crate::models::WalletPatch;
use crate::stores::wallets::WalletStore;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(kv: &Kv, m: &clap::ArgMatches) -> Result<()> {
    let mut store = WalletStore::load(kv);
    match m.subcommand() {
        Some(("create", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let emoji = sub.get_one::<String>("emoji").unwrap();
            if !catalog::WALLET_EMOJIS.contains(&emoji.as_str()) {
                bail!(
                    "Emoji '{}' is not available; pick one of {}",
                    emoji,
                    catalog::WALLET_EMOJIS.join(" ")
                );
            }
            let code = sub.get_one::<String>("currency").unwrap();
            let client = Client::from_env()?;
            // The server wants its own currency id; accept a code and look
            // it up the way the create-wallet screen does.
            let currencies = client
                .currencies(kv)
                .map_err(|e| anyhow!("Could not fetch currencies: {}", e))?;
            let currency = currencies
                .iter()
                .find(|c| c.code.eq_ignore_ascii_case(code) || &c.id == code)
                .ok_or_else(|| {
                    anyhow!("Unknown currency '{}'; see 'funexpense currencies list'", code)
                })?;
            let wallet = store
                .create(kv, &client, name, emoji, &currency.id)
                .map_err(|e| anyhow!("Could not create wallet: {}", e))?;
            println!(
                "Created wallet {} '{}' ({}) with id {}",
                wallet.emoji, wallet.name, wallet.currency, wallet.id
            );
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &store.all())? {
                let selected = store.selected_id();
                let rows: Vec<Vec<String>> = store
                    .all()
                    .iter()
                    .map(|w| {
                        vec![
                            if selected == Some(w.id.as_str()) { "*".into() } else { "".into() },
                            w.id.clone(),
                            w.emoji.clone(),
                            w.name.clone(),
                            w.currency.clone(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["", "Id", "", "Name", "CCY"], rows));
            }
        }
        Some(("select", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.select(kv, id);
            println!("Selected wallet {}", id);
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            if store.get(id).is_none() {
                println!("No wallet with id {}", id);
                return Ok(());
            }
            let patch = WalletPatch {
                name: sub.get_one::<String>("name").cloned(),
                emoji: sub.get_one::<String>("emoji").cloned(),
                currency: sub.get_one::<String>("currency").cloned(),
            };
            store.update(kv, id, patch);
            println!("Updated wallet {}", id);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            if store.delete(kv, id) {
                println!("Removed wallet {}", id);
            } else {
                println!("Wallet {} was not removed", id);
            }
        }
        _ => {}
    }
    Ok(())
}
