use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A live broadcast as last reported by the API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StreamEntry {
    /// Stable id of the broadcasting account.
    pub user_id: String,
    pub stream_id: String,
    pub title: Option<String>,
    pub game: Option<String>,
    pub viewer_count: u64,
    pub started_at: Option<DateTime<Utc>>,
    /// The full stream document, for fields this crate does not model.
    pub raw: Value,
    pub refreshed_at: DateTime<Utc>,
}

/// What the stream cache holds for a name it has seen before.
///
/// Both variants keep the stable id so a stale entry can be refreshed
/// without resolving the account again.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedStream {
    /// The account exists but was not live at `refreshed_at`.
    Offline {
        user_id: String,
        refreshed_at: DateTime<Utc>,
    },
    Live(StreamEntry),
}

impl CachedStream {
    pub fn user_id(&self) -> &str {
        match self {
            CachedStream::Offline { user_id, .. } => user_id,
            CachedStream::Live(entry) => &entry.user_id,
        }
    }

    pub fn refreshed_at(&self) -> DateTime<Utc> {
        match self {
            CachedStream::Offline { refreshed_at, .. } => *refreshed_at,
            CachedStream::Live(entry) => entry.refreshed_at,
        }
    }

    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now - self.refreshed_at() > max_age
    }

    /// The live entry, or `None` for a confirmed offline account.
    pub fn into_entry(self) -> Option<StreamEntry> {
        match self {
            CachedStream::Offline { .. } => None,
            CachedStream::Live(entry) => Some(entry),
        }
    }
}

/// Three-state view of one cache key.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamSlot {
    /// Never queried (or invalidated).
    Unknown,
    /// Confirmed not live as of the given time.
    Offline(DateTime<Utc>),
    Live(StreamEntry),
}

impl From<Option<CachedStream>> for StreamSlot {
    fn from(cached: Option<CachedStream>) -> Self {
        match cached {
            None => StreamSlot::Unknown,
            Some(CachedStream::Offline { refreshed_at, .. }) => StreamSlot::Offline(refreshed_at),
            Some(CachedStream::Live(entry)) => StreamSlot::Live(entry),
        }
    }
}
