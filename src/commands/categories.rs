// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::catalog;
use crate::utils::{maybe_print_json, parse_kind, pretty_table};

/// The catalog is compiled in; listing is the only operation.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let kind = sub
                .get_one::<String>("type")
                .map(|t| parse_kind(t))
                .transpose()?;
            let cats: Vec<_> = match kind {
                Some(k) => catalog::categories_for(k),
                None => catalog::CATEGORIES.iter().collect(),
            };
            if !maybe_print_json(json_flag, jsonl_flag, &cats)? {
                let rows: Vec<Vec<String>> = cats
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.to_string(),
                            format!("{} {}", c.emoji, c.name),
                            c.kind.to_string(),
                            c.color.to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Category", "Type", "Color"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
