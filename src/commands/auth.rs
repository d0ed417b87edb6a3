// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow, bail};

use crate::api::Client;
use crate::db::Kv;
use crate::session::{Screen, Session};
use crate::utils::is_valid_email;

pub fn handle(kv: &Kv, mut session: Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("login", sub)) => {
            let email = sub.get_one::<String>("email").unwrap().trim().to_string();
            if !is_valid_email(&email) {
                bail!("'{}' does not look like an email address", email);
            }
            let client = Client::from_env()?;
            session
                .send_otp(kv, &client, &email)
                .map_err(|msg| anyhow!(msg))?;
            println!("OTP sent to {}. Check your inbox.", email);
            println!("Then run: funexpense auth verify --email {} --code <code>", email);
        }
        Some(("verify", sub)) => {
            let email = sub.get_one::<String>("email").unwrap().trim().to_string();
            let code = sub.get_one::<String>("code").unwrap().trim().to_string();
            if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
                bail!("The code is 6 digits, got '{}'", code);
            }
            let client = Client::from_env()?;
            session
                .verify_otp(kv, &client, &email, &code)
                .map_err(|msg| anyhow!(msg))?;
            match session.user() {
                Some(user) => println!("Welcome, {}! You are signed in.", user.name),
                None => println!("You are signed in."),
            }
        }
        Some(("onboard", _)) => {
            session.complete_onboarding(kv);
            println!("Onboarding complete. Sign in with 'funexpense auth login --email <you>'.");
        }
        Some(("status", _)) => {
            status(&session);
        }
        Some(("logout", _)) => {
            session.logout(kv)?;
            println!("Logged out.");
        }
        _ => {}
    }
    Ok(())
}

fn status(session: &Session) {
    let screen = match session.gate() {
        Screen::Onboarding => "onboarding",
        Screen::Login => "login",
        Screen::Home => "home",
    };
    println!("Onboarding complete: {}", session.onboarding_complete());
    println!("Authenticated:       {}", session.is_authenticated());
    println!("Refresh token:       {}", if session.has_refresh_token() { "present" } else { "absent" });
    if let Some(user) = session.user() {
        println!("Signed in as:        {} <{}>", user.name, user.email);
    }
    println!("Gate:                {}", screen);
}
