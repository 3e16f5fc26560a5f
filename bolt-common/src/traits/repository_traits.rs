use async_trait::async_trait;
use crate::error::Error;
use crate::models::TwitchAccount;

/// Durable storage for [`TwitchAccount`] rows, keyed by login name.
///
/// Implementations hold at most one row per `name`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<TwitchAccount>, Error>;
    async fn insert(&self, account: &TwitchAccount) -> Result<(), Error>;

    /// Overwrites the row currently stored under `name`.
    async fn update_by_name(&self, account: &TwitchAccount, name: &str) -> Result<(), Error>;
}
