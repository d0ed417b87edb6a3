// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{Kv, keys};
use crate::models::{Settings, SettingsPatch};

/// Singleton settings blob. Missing or corrupt data falls back to defaults.
pub struct SettingsStore {
    value: Settings,
}

impl SettingsStore {
    pub fn load(kv: &Kv) -> Self {
        let value = match kv.get_json::<Settings>(keys::SETTINGS) {
            Ok(Some(v)) => v,
            Ok(None) => Settings::default(),
            Err(err) => {
                eprintln!("Error loading settings: {:#}", err);
                Settings::default()
            }
        };
        SettingsStore { value }
    }

    pub fn get(&self) -> &Settings {
        &self.value
    }

    /// Shallow merge. Memory updates first; a failed write is logged and the
    /// in-memory value stands.
    pub fn update(&mut self, kv: &Kv, patch: SettingsPatch) {
        if let Some(display_name) = patch.display_name {
            self.value.display_name = display_name;
        }
        if let Some(avatar) = patch.avatar {
            self.value.avatar = avatar;
        }
        if let Some(currency) = patch.currency {
            self.value.currency = currency;
        }
        if let Some(currency_symbol) = patch.currency_symbol {
            self.value.currency_symbol = currency_symbol;
        }
        if let Err(err) = kv.set_json(keys::SETTINGS, &self.value) {
            eprintln!("Error saving settings: {:#}", err);
        }
    }

    /// Re-reads from storage, picking up writes made elsewhere.
    pub fn reload(&mut self, kv: &Kv) {
        *self = SettingsStore::load(kv);
    }
}
