// File: bolt-core/src/platforms/twitch/client.rs

use std::sync::Arc;
use serde_json::Value;
use crate::config::TwitchConfig;
use crate::http::{ApiFetcher, DefaultHttpClient};
use crate::Error;

const KRAKEN_ACCEPT: &str = "application/vnd.twitchtv.v5+json";

/// Entry point for Twitch API calls: knows the base URL and how to build
/// endpoint URLs, and delegates the actual GET to an [`ApiFetcher`].
///
/// The request helpers live in `requests::user` and `requests::stream`.
#[derive(Clone)]
pub struct TwitchApiClient {
    fetcher: Arc<dyn ApiFetcher>,
    base_url: String,
}

impl TwitchApiClient {
    pub fn new(fetcher: Arc<dyn ApiFetcher>, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Production client: reqwest with the `Client-ID` and v5 `Accept` headers.
    pub fn from_config(config: &TwitchConfig) -> Self {
        let http = DefaultHttpClient::new()
            .with_header("Client-ID", &config.client_id)
            .with_header("Accept", KRAKEN_ACCEPT);
        Self::new(Arc::new(http), &config.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /users?login=<name>`
    pub fn users_url(&self, login: &str) -> String {
        format!("{}/users?login={}", self.base_url, urlencoding::encode(login))
    }

    /// `GET /streams/<user id>`
    pub fn stream_url(&self, user_id: &str) -> String {
        format!("{}/streams/{}", self.base_url, urlencoding::encode(user_id))
    }

    pub async fn fetch(&self, url: &str) -> Result<Value, Error> {
        self.fetcher.fetch(url).await
    }
}

/// Twitch logins are case-insensitive; caches and the store key on this form.
pub fn normalize_login(name: &str) -> String {
    name.trim().to_lowercase()
}
