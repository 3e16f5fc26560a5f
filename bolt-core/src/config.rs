// File: bolt-core/src/config.rs

use chrono::Duration;
use crate::Error;

/// Hours after which a stored account is fetched again.
pub const ACCOUNT_STALE_HOURS: i64 = 12;

/// Minutes after which a cached stream status is fetched again.
pub const STREAM_STALE_MINUTES: i64 = 2;

pub const DEFAULT_API_BASE_URL: &str = "https://api.twitch.tv/kraken";

/// Settings for talking to the Twitch API and for the two cache TTLs.
#[derive(Debug, Clone)]
pub struct TwitchConfig {
    pub client_id: String,
    pub api_base_url: String,
    pub account_stale_after: Duration,
    pub stream_stale_after: Duration,
}

impl TwitchConfig {
    pub fn new(client_id: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            account_stale_after: Duration::hours(ACCOUNT_STALE_HOURS),
            stream_stale_after: Duration::minutes(STREAM_STALE_MINUTES),
        }
    }

    pub fn with_api_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_account_stale_after(mut self, max_age: Duration) -> Self {
        self.account_stale_after = max_age;
        self
    }

    pub fn with_stream_stale_after(mut self, max_age: Duration) -> Self {
        self.stream_stale_after = max_age;
        self
    }

    /// Reads the config from process environment variables.
    ///
    /// - `TWITCH_TOKEN` (required): client id sent with every request
    /// - `TWITCH_API_BASE_URL`
    /// - `BOLT_ACCOUNT_STALE_HOURS`
    /// - `BOLT_STREAM_STALE_MINUTES`
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TwitchConfig::from_env`], with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup("TWITCH_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::Config("TWITCH_TOKEN is not set".into()))?;

        let mut config = Self::new(client_id.trim());

        if let Some(base_url) = lookup("TWITCH_API_BASE_URL") {
            config = config.with_api_base_url(base_url.trim());
        }
        if let Some(hours) = lookup("BOLT_ACCOUNT_STALE_HOURS") {
            config.account_stale_after = Duration::hours(parse_positive("BOLT_ACCOUNT_STALE_HOURS", &hours)?);
        }
        if let Some(minutes) = lookup("BOLT_STREAM_STALE_MINUTES") {
            config.stream_stale_after = Duration::minutes(parse_positive("BOLT_STREAM_STALE_MINUTES", &minutes)?);
        }

        Ok(config)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<i64, Error> {
    match raw.trim().parse::<i64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(Error::Config(format!("{key} must be a positive integer, got '{raw}'"))),
    }
}
