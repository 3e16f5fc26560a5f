use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A Twitch account as stored in the `twitch_users` table.
///
/// `name` is the login name and the lookup key; `user_id` is Twitch's own
/// immutable id, which is what the stream endpoints take.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct TwitchAccount {
    pub name: String,
    pub user_id: String,
    pub display_name: String,
    pub profile_image_url: Option<String>,
    pub bio: Option<String>,
    pub account_type: String,
    pub created_at: DateTime<Utc>,
    /// Twitch's own last-modified timestamp for the account.
    pub api_updated_at: DateTime<Utc>,
    /// When this row was last written locally.
    pub last_refreshed: DateTime<Utc>,
}

impl TwitchAccount {
    /// Whether more than `max_age` has passed since the last local refresh.
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now - self.last_refreshed > max_age
    }
}
