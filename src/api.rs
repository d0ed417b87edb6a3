// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::db::{Kv, keys};
use crate::models::{Currency, TokenPair, User, Wallet};

const UA: &str = concat!(
    "funexpense/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/funexpense)"
);

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendOtpResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpResponse {
    pub user: User,
    pub token: TokenPair,
}

#[derive(Debug, Deserialize)]
struct WalletEnvelope {
    wallet: Wallet,
}

#[derive(Debug, Deserialize)]
struct CurrenciesEnvelope {
    currencies: Vec<Currency>,
}

pub struct Client {
    base: String,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(base: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        let base = base.into().trim_end_matches('/').to_string();
        Ok(Client { base, http })
    }

    pub fn from_env() -> Result<Self, ApiError> {
        let base = std::env::var("FUNEXPENSE_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Client::new(base)
    }

    pub fn send_otp(&self, kv: &Kv, email: &str) -> Result<SendOtpResponse, ApiError> {
        let req = self
            .http
            .post(format!("{}/v1/auth/send-otp", self.base))
            .json(&json!({ "email": email }));
        Ok(self.execute(kv, req)?.json()?)
    }

    pub fn verify_otp(
        &self,
        kv: &Kv,
        email: &str,
        otp: &str,
    ) -> Result<VerifyOtpResponse, ApiError> {
        let req = self
            .http
            .post(format!("{}/v1/auth/verify-otp", self.base))
            .json(&json!({ "email": email, "otp": otp }));
        Ok(self.execute(kv, req)?.json()?)
    }

    pub fn create_wallet(
        &self,
        kv: &Kv,
        name: &str,
        emoji: &str,
        currency_id: &str,
    ) -> Result<Wallet, ApiError> {
        let req = self
            .http
            .post(format!("{}/v1/wallets", self.base))
            .json(&json!({ "name": name, "emoji": emoji, "currencyId": currency_id }));
        let envelope: WalletEnvelope = self.execute(kv, req)?.json()?;
        Ok(envelope.wallet)
    }

    pub fn currencies(&self, kv: &Kv) -> Result<Vec<Currency>, ApiError> {
        let req = self.http.get(format!("{}/v1/currencies", self.base));
        let envelope: CurrenciesEnvelope = self.execute(kv, req)?.json()?;
        Ok(envelope.currencies)
    }

    /// Attaches the stored bearer token when present, maps non-success
    /// responses to `ApiError::Status`, and drops cached credentials on 401.
    fn execute(
        &self,
        kv: &Kv,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let req = match kv.get_raw(keys::AUTH_TOKEN) {
            Ok(Some(token)) => req.bearer_auth(token),
            Ok(None) => req,
            Err(err) => {
                eprintln!("Error reading auth token: {:#}", err);
                req
            }
        };
        let resp = req.send()?;
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        if status == 401 {
            clear_cached_credentials(kv);
        }
        let message = resp.json::<ErrorBody>().ok().and_then(|b| b.message);
        Err(ApiError::Status { status, message })
    }
}

/// Token expired or invalid: the router redirects on next run; here we only
/// clear the cached auth entries (the onboarding flag stays).
fn clear_cached_credentials(kv: &Kv) {
    for key in [keys::AUTH_TOKEN, keys::REFRESH_TOKEN, keys::USER] {
        if let Err(err) = kv.remove(key) {
            eprintln!("Error clearing '{}': {:#}", key, err);
        }
    }
}
