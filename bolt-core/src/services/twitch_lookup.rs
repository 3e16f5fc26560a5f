use std::sync::Arc;

use crate::cache::StreamCache;
use crate::config::TwitchConfig;
use crate::db::Database;
use crate::models::{StreamEntry, TwitchAccount};
use crate::platforms::twitch::TwitchApiClient;
use crate::repositories::{AccountRepository, SqliteAccountRepository};
use crate::services::{AccountResolver, StreamResolver};
use crate::Error;

/// Single entry point for account and stream lookups.
///
/// A [`Error::NotFound`] from account resolution comes back unchanged from
/// every method except [`TwitchLookup::account_exists`].
pub struct TwitchLookup {
    accounts: Arc<AccountResolver>,
    streams: StreamResolver,
}

impl TwitchLookup {
    pub fn new(accounts: Arc<AccountResolver>, streams: StreamResolver) -> Self {
        Self { accounts, streams }
    }

    /// Wires both resolvers over one API client and repository.
    pub fn from_parts(
        config: &TwitchConfig,
        api: Arc<TwitchApiClient>,
        repo: Arc<dyn AccountRepository>,
    ) -> Self {
        let accounts = Arc::new(AccountResolver::new(repo, api.clone(), config.account_stale_after));
        let streams = StreamResolver::new(
            accounts.clone(),
            api,
            StreamCache::new(config.stream_stale_after),
        );
        Self::new(accounts, streams)
    }

    /// Production wiring: reqwest against the configured API, SQLite for accounts.
    pub fn connect(config: &TwitchConfig, database: &Database) -> Self {
        let api = Arc::new(TwitchApiClient::from_config(config));
        let repo = Arc::new(SqliteAccountRepository::new(database.pool().clone()));
        Self::from_parts(config, api, repo)
    }

    pub async fn get_account(&self, name: &str) -> Result<TwitchAccount, Error> {
        self.accounts.resolve(name).await
    }

    pub async fn get_stream(&self, name: &str) -> Result<Option<StreamEntry>, Error> {
        self.streams.resolve(name).await
    }

    /// Only a not-found answer maps to `false`; other failures propagate.
    pub async fn account_exists(&self, name: &str) -> Result<bool, Error> {
        match self.accounts.resolve(name).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn stream_cache(&self) -> &StreamCache {
        self.streams.cache()
    }
}
