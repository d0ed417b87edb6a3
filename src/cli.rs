// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::catalog;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("funexpense")
        .about("Personal income/expense tracker with wallets and category insights")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the local store and print its path"))
        .subcommand(
            Command::new("auth")
                .about("Sign in with an emailed one-time passcode")
                .subcommand(
                    Command::new("login").about("Request an OTP email").arg(
                        Arg::new("email")
                            .long("email")
                            .required(true)
                            .help("Email address to send the code to"),
                    ),
                )
                .subcommand(
                    Command::new("verify")
                        .about("Verify the emailed code and sign in")
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(
                            Arg::new("code")
                                .long("code")
                                .required(true)
                                .help("6-digit code from the email"),
                        ),
                )
                .subcommand(Command::new("onboard").about("Mark onboarding as complete"))
                .subcommand(Command::new("status").about("Show the current session"))
                .subcommand(Command::new("logout").about("Clear the stored session")),
        )
        .subcommand(
            Command::new("wallet")
                .about("Manage wallets")
                .subcommand(
                    Command::new("create")
                        .about("Create a wallet on the server and cache it locally")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("emoji")
                                .long("emoji")
                                .default_value(catalog::DEFAULT_WALLET_EMOJI),
                        )
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .required(true)
                                .help("Currency code or id from 'currencies list'"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List wallets")))
                .subcommand(
                    Command::new("select")
                        .about("Pick the wallet in focus")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a wallet locally")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("emoji").long("emoji"))
                        .arg(Arg::new("currency").long("currency")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a wallet (the last one cannot be deleted)")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction against a wallet")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive amount, e.g. 12.50"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category id from 'categories list'"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("expense|income"),
                        )
                        .arg(Arg::new("note").long("note").default_value(""))
                        .arg(
                            Arg::new("wallet")
                                .long("wallet")
                                .help("Wallet id (defaults to the selected wallet)"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD (defaults to today)"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("wallet").long("wallet").help("Wallet id"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit a transaction")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("note").long("note"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("wallet").long("wallet")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Balances and spending breakdowns")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Balance, income, and expenses for a wallet")
                        .arg(
                            Arg::new("wallet")
                                .long("wallet")
                                .help("Wallet id (defaults to the selected wallet)"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("spend-by-category")
                        .about("Per-category totals with shares")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("expense|income"),
                        )
                        .arg(
                            Arg::new("wallet")
                                .long("wallet")
                                .help("Wallet id (defaults to all wallets)"),
                        ),
                )),
        )
        .subcommand(
            Command::new("settings")
                .about("Display name, avatar, and currency preference")
                .subcommand(json_flags(Command::new("show").about("Show current settings")))
                .subcommand(
                    Command::new("set")
                        .about("Change settings (only the given fields)")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("avatar").long("avatar"))
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .help("ISO code, e.g. EUR"),
                        ),
                ),
        )
        .subcommand(
            Command::new("categories")
                .about("Bundled category catalog")
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("type").long("type").help("expense|income")),
                )),
        )
        .subcommand(
            Command::new("currencies")
                .about("Currencies offered by the server")
                .subcommand(json_flags(Command::new("list"))),
        )
        .subcommand(
            Command::new("import").about("Import data").subcommand(
                Command::new("transactions")
                    .about("Import transactions from CSV")
                    .arg(Arg::new("path").long("path").required(true))
                    .arg(
                        Arg::new("wallet")
                            .long("wallet")
                            .help("Wallet id for rows without one (defaults to the selected wallet)"),
                    ),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export transactions to CSV or JSON")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Audit the local store for inconsistencies"))
}
