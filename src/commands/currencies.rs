// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::api::Client;
use crate::db::Kv;
use crate::utils::{maybe_print_json, pretty_table};

/// Lists the currencies the server offers for wallet creation.
pub fn handle(kv: &Kv, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let client = Client::from_env()?;
            let currencies = client
                .currencies(kv)
                .map_err(|e| anyhow!("Could not fetch currencies: {}", e))?;
            if !maybe_print_json(json_flag, jsonl_flag, &currencies)? {
                let rows: Vec<Vec<String>> = currencies
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.clone(),
                            c.flag.clone(),
                            c.code.clone(),
                            c.name.clone(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "", "Code", "Name"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
