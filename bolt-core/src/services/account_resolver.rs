use std::sync::Arc;
use chrono::{Duration, Utc};
use tracing::{debug, info};

use crate::models::TwitchAccount;
use crate::platforms::twitch::requests::user::fetch_user;
use crate::platforms::twitch::{normalize_login, TwitchApiClient};
use crate::repositories::AccountRepository;
use crate::Error;

/// Resolves login names to stored accounts, using the repository as a
/// write-through cache that is refreshed once a row is older than `stale_after`.
pub struct AccountResolver {
    repo: Arc<dyn AccountRepository>,
    api: Arc<TwitchApiClient>,
    stale_after: Duration,
}

impl AccountResolver {
    pub fn new(
        repo: Arc<dyn AccountRepository>,
        api: Arc<TwitchApiClient>,
        stale_after: Duration,
    ) -> Self {
        Self { repo, api, stale_after }
    }

    pub fn stale_after(&self) -> Duration {
        self.stale_after
    }

    /// Returns the account for `name`, fetching it when it is missing or stale.
    ///
    /// A name Twitch does not know fails with [`Error::NotFound`]; nothing is
    /// written in that case, so the next call asks the API again.
    pub async fn resolve(&self, name: &str) -> Result<TwitchAccount, Error> {
        let key = normalize_login(name);
        let now = Utc::now();

        match self.repo.find_by_name(&key).await? {
            None => {
                let user = fetch_user(&self.api, &key).await?;
                let account = user.into_account(&key, now)?;
                self.repo.insert(&account).await?;
                info!("Added {} to the user database.", key);
                Ok(account)
            }
            Some(stored) if stored.is_stale(now, self.stale_after) => {
                let user = fetch_user(&self.api, &key).await?;
                let account = user.into_account(&key, now)?;
                self.repo.update_by_name(&account, &key).await?;
                info!("Updated {} on the user database.", key);
                Ok(account)
            }
            Some(stored) => {
                debug!("Got user {} from the database.", key);
                Ok(stored)
            }
        }
    }
}
