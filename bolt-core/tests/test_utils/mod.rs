// File: bolt-core/tests/test_utils/mod.rs
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde_json::{json, Value};

use bolt_core::Error;
use bolt_core::cache::StreamCache;
use bolt_core::http::ApiFetcher;
use bolt_core::models::TwitchAccount;
use bolt_core::platforms::twitch::TwitchApiClient;
use bolt_core::repositories::AccountRepository;
use bolt_core::services::{AccountResolver, StreamResolver, TwitchLookup};
use bolt_core::TwitchConfig;

pub const BASE_URL: &str = "https://api.test/kraken";

/// `AccountRepository` backed by a DashMap, counting writes.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: DashMap<String, TwitchAccount>,
    inserts: AtomicUsize,
    updates: AtomicUsize,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a row in place without counting it as a write.
    pub fn seed(&self, account: TwitchAccount) {
        self.accounts.insert(account.name.clone(), account);
    }

    pub fn get(&self, name: &str) -> Option<TwitchAccount> {
        self.accounts.get(name).map(|a| a.value().clone())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.inserts() + self.updates()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<TwitchAccount>, Error> {
        Ok(self.get(name))
    }

    async fn insert(&self, account: &TwitchAccount) -> Result<(), Error> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.accounts.insert(account.name.clone(), account.clone());
        Ok(())
    }

    async fn update_by_name(&self, account: &TwitchAccount, name: &str) -> Result<(), Error> {
        if !self.accounts.contains_key(name) {
            return Err(Error::Database(sqlx::Error::RowNotFound));
        }
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.accounts.insert(name.to_string(), account.clone());
        Ok(())
    }
}

#[derive(Clone)]
enum Scripted {
    Json(Value),
    NotFound,
    Failure(String),
}

/// `ApiFetcher` that answers from a URL -> response table and records calls.
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: DashMap<String, Scripted>,
    calls: DashMap<String, usize>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, body: Value) {
        self.responses.insert(url.to_string(), Scripted::Json(body));
    }

    pub fn respond_not_found(&self, url: &str) {
        self.responses.insert(url.to_string(), Scripted::NotFound);
    }

    pub fn respond_failure(&self, url: &str, message: &str) {
        self.responses.insert(url.to_string(), Scripted::Failure(message.to_string()));
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.get(url).map(|c| *c).unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.iter().map(|c| *c.value()).sum()
    }
}

#[async_trait]
impl ApiFetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, Error> {
        *self.calls.entry(url.to_string()).or_insert(0) += 1;
        let scripted = self.responses.get(url).map(|r| r.value().clone());
        match scripted {
            Some(Scripted::Json(body)) => Ok(body),
            Some(Scripted::NotFound) => Err(Error::NotFound(url.to_string())),
            Some(Scripted::Failure(message)) => Err(Error::Platform(message)),
            None => Err(Error::Platform(format!("unscripted url {url}"))),
        }
    }
}

pub fn users_url(login: &str) -> String {
    format!("{BASE_URL}/users?login={login}")
}

pub fn stream_url(user_id: &str) -> String {
    format!("{BASE_URL}/streams/{user_id}")
}

pub fn user_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "display_name": name.to_uppercase(),
        "logo": format!("https://static-cdn.test/{name}.png"),
        "bio": null,
        "type": "user",
        "created_at": "2013-06-03T19:12:02.580593Z",
        "updated_at": "2016-12-14T01:01:44.587405Z"
    })
}

pub fn users_response(id: &str, name: &str) -> Value {
    json!({ "_total": 1, "users": [user_json(id, name)] })
}

pub fn empty_users_response() -> Value {
    json!({ "_total": 0, "users": [] })
}

pub fn live_stream_response(channel_id: u64, viewers: u64) -> Value {
    json!({
        "stream": {
            "_id": 23932774784u64,
            "game": "BATMAN - The Telltale Series",
            "viewers": viewers,
            "created_at": "2016-12-14T22:49:56Z",
            "channel": {
                "_id": channel_id,
                "status": "Playing the game",
                "name": "someone"
            }
        }
    })
}

pub fn offline_stream_response() -> Value {
    json!({ "stream": null })
}

pub fn account(name: &str, user_id: &str, last_refreshed: DateTime<Utc>) -> TwitchAccount {
    TwitchAccount {
        name: name.to_string(),
        user_id: user_id.to_string(),
        display_name: name.to_uppercase(),
        profile_image_url: None,
        bio: Some("old bio".to_string()),
        account_type: "user".to_string(),
        created_at: last_refreshed - Duration::days(365),
        api_updated_at: last_refreshed - Duration::days(1),
        last_refreshed,
    }
}

pub fn test_config() -> TwitchConfig {
    TwitchConfig::new("test-client-id").with_api_base_url(BASE_URL)
}

/// The pieces every resolver test needs, sharing one fetcher and repository.
pub struct Harness {
    pub fetcher: Arc<ScriptedFetcher>,
    pub repo: Arc<InMemoryAccountRepository>,
    pub api: Arc<TwitchApiClient>,
    pub config: TwitchConfig,
}

impl Harness {
    pub fn new() -> Self {
        let fetcher = Arc::new(ScriptedFetcher::new());
        let api = Arc::new(TwitchApiClient::new(fetcher.clone(), BASE_URL));
        Self {
            fetcher,
            repo: Arc::new(InMemoryAccountRepository::new()),
            api,
            config: test_config(),
        }
    }

    pub fn account_resolver(&self) -> Arc<AccountResolver> {
        Arc::new(AccountResolver::new(
            self.repo.clone(),
            self.api.clone(),
            self.config.account_stale_after,
        ))
    }

    pub fn stream_resolver(&self) -> StreamResolver {
        StreamResolver::new(
            self.account_resolver(),
            self.api.clone(),
            StreamCache::new(self.config.stream_stale_after),
        )
    }

    pub fn lookup(&self) -> TwitchLookup {
        TwitchLookup::from_parts(&self.config, self.api.clone(), self.repo.clone())
    }
}
