// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::catalog;
use crate::db::Kv;
use crate::models::SettingsPatch;
use crate::stores::settings::SettingsStore;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(kv: &Kv, m: &clap::ArgMatches) -> Result<()> {
    let mut store = SettingsStore::load(kv);
    match m.subcommand() {
        Some(("show", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let s = store.get();
            if !maybe_print_json(json_flag, jsonl_flag, s)? {
                let rows = vec![
                    vec!["Name".to_string(), s.display_name.clone()],
                    vec!["Avatar".to_string(), s.avatar.clone()],
                    vec![
                        "Currency".to_string(),
                        format!("{} ({})", s.currency, s.currency_symbol),
                    ],
                ];
                println!("{}", pretty_table(&["Setting", "Value"], rows));
            }
        }
        Some(("set", sub)) => {
            if let Some(avatar) = sub.get_one::<String>("avatar") {
                if !catalog::AVATARS.contains(&avatar.as_str()) {
                    bail!(
                        "Avatar '{}' is not available; pick one of {}",
                        avatar,
                        catalog::AVATARS.join(" ")
                    );
                }
            }
            let mut patch = SettingsPatch {
                display_name: sub.get_one::<String>("name").cloned(),
                avatar: sub.get_one::<String>("avatar").cloned(),
                ..Default::default()
            };
            if let Some(code) = sub.get_one::<String>("currency") {
                let Some(info) = catalog::currency_info(code) else {
                    bail!("Unknown currency code '{}'", code);
                };
                patch.currency = Some(info.code.to_string());
                patch.currency_symbol = Some(info.symbol.to_string());
            }
            store.update(kv, patch);
            let s = store.get();
            println!(
                "Settings saved: {} {} ({} {})",
                s.avatar, s.display_name, s.currency, s.currency_symbol
            );
        }
        _ => {}
    }
    Ok(())
}
