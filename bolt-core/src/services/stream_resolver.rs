use std::sync::Arc;
use chrono::Utc;
use tracing::debug;

use crate::cache::StreamCache;
use crate::models::{CachedStream, StreamEntry};
use crate::platforms::twitch::requests::stream::fetch_stream;
use crate::platforms::twitch::{normalize_login, TwitchApiClient};
use crate::services::AccountResolver;
use crate::Error;

/// Resolves login names to their current live status through a [`StreamCache`].
///
/// Only a miss goes through the [`AccountResolver`]; a stale entry is
/// refreshed with the user id it already holds.
pub struct StreamResolver {
    accounts: Arc<AccountResolver>,
    api: Arc<TwitchApiClient>,
    cache: StreamCache,
}

impl StreamResolver {
    pub fn new(accounts: Arc<AccountResolver>, api: Arc<TwitchApiClient>, cache: StreamCache) -> Self {
        Self { accounts, api, cache }
    }

    pub fn cache(&self) -> &StreamCache {
        &self.cache
    }

    /// `Ok(None)` means the account exists but is not live.
    ///
    /// Unknown accounts fail with [`Error::NotFound`] and leave no cache entry.
    /// Concurrent calls for the same name are not coalesced; the last write
    /// to the cache wins.
    pub async fn resolve(&self, name: &str) -> Result<Option<StreamEntry>, Error> {
        let key = normalize_login(name);
        let now = Utc::now();

        if let Some(cached) = self.cache.get(&key) {
            if !cached.is_stale(now, self.cache.ttl()) {
                debug!("Got Stream for {} from Cache.", key);
                return Ok(cached.into_entry());
            }
            debug!("Cached Stream for {} is stale, refreshing.", key);
            let refreshed = fetch_stream(&self.api, cached.user_id(), now).await?;
            return Ok(self.store(&key, refreshed));
        }

        let account = self.accounts.resolve(&key).await?;
        let fetched = fetch_stream(&self.api, &account.user_id, now).await?;
        Ok(self.store(&key, fetched))
    }

    fn store(&self, key: &str, cached: CachedStream) -> Option<StreamEntry> {
        self.cache.insert(key, cached.clone());
        cached.into_entry()
    }
}
