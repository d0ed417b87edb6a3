// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "FunExpense", "funexpense"));

/// Storage keys, one JSON blob (or plain string) per key.
pub mod keys {
    pub const TRANSACTIONS: &str = "funexpense_transactions";
    pub const WALLETS: &str = "funexpense_wallets";
    pub const SELECTED_WALLET: &str = "funexpense_selected_wallet";
    pub const SETTINGS: &str = "funexpense_settings";
    pub const AUTH_TOKEN: &str = "funexpense_auth_token";
    pub const REFRESH_TOKEN: &str = "funexpense_refresh_token";
    pub const USER: &str = "funexpense_user";
    pub const ONBOARDING: &str = "funexpense_onboarding_completed";
}

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("funexpense.sqlite"))
}

/// On-device key-value storage: a single SQLite file with one row per key.
pub struct Kv {
    conn: Connection,
}

impl Kv {
    pub fn new(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Kv { conn })
    }

    pub fn open_default() -> Result<Self> {
        let path = store_path()?;
        let conn =
            Connection::open(&path).with_context(|| format!("Open store at {}", path.display()))?;
        Kv::new(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Kv::new(Connection::open_in_memory()?)
    }

    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let v = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()
            .with_context(|| format!("Read '{}'", key))?;
        Ok(v)
    }

    pub fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv(key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value",
                params![key, value],
            )
            .with_context(|| format!("Write '{}'", key))?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key=?1", params![key])
            .with_context(|| format!("Remove '{}'", key))?;
        Ok(())
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(blob) => {
                let v =
                    serde_json::from_str(&blob).with_context(|| format!("Parse '{}'", key))?;
                Ok(Some(v))
            }
            None => Ok(None),
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let blob = serde_json::to_string(value)?;
        self.set_raw(key, &blob)
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}
