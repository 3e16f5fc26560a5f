//! HTTP fetch abstraction for the Twitch integration.
//!
//! Everything above this layer sees the remote API as a single operation:
//! fetch a URL, get back a JSON document or an error. Tests swap in their own
//! [`ApiFetcher`] so no real network traffic is needed.
//!
//! Errors follow one rule: a 404 becomes [`Error::NotFound`], any other
//! non-success status becomes [`Error::Platform`], and transport or decode
//! failures pass through as [`Error::Http`] / [`Error::Json`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};
use crate::Error;

/// Fetches a URL and returns its JSON body.
#[async_trait]
pub trait ApiFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value, Error>;
}

#[derive(Clone)]
pub struct DefaultHttpClient {
    client: reqwest::Client,
    headers: HashMap<String, String>,
}

impl DefaultHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            headers: HashMap::new(),
        }
    }

    /// Adds a header sent with every request.
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }
}

impl Default for DefaultHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiFetcher for DefaultHttpClient {
    async fn fetch(&self, url: &str) -> Result<Value, Error> {
        debug!("Querying `{}`...", url);

        let mut request = self.client.get(url);
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }
        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!("GET {} returned HTTP {}", url, status);
            return Err(Error::Platform(format!("HTTP {} => {}", status, body_text)));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
