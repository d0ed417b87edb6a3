// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use funexpense::session::Screen;
use funexpense::{cli, commands, db, session};

/// Subcommands that only make sense inside the app proper, the way the
/// original router keeps these screens behind the auth gate.
const PROTECTED: &[&str] = &[
    "wallet",
    "tx",
    "report",
    "settings",
    "currencies",
    "import",
    "export",
];

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let kv = db::Kv::open_default()?;
    let session = session::Session::load(&kv);

    if let Some((name, _)) = matches.subcommand() {
        if PROTECTED.contains(&name) {
            match session.gate() {
                Screen::Home => {}
                Screen::Onboarding => {
                    println!(
                        "Welcome to FunExpense! Run 'funexpense auth onboard' to get started."
                    );
                    return Ok(());
                }
                Screen::Login => {
                    println!(
                        "You are signed out. Run 'funexpense auth login --email <you>' to sign in."
                    );
                    return Ok(());
                }
            }
        }
    }

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized at {}", db::store_path()?.display());
        }
        Some(("auth", sub)) => commands::auth::handle(&kv, session, sub)?,
        Some(("wallet", sub)) => commands::wallets::handle(&kv, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&kv, sub)?,
        Some(("report", sub)) => commands::reports::handle(&kv, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&kv, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("currencies", sub)) => commands::currencies::handle(&kv, sub)?,
        Some(("import", sub)) => commands::importer::handle(&kv, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&kv, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&kv)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
