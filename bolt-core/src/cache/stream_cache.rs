// File: src/cache/stream_cache.rs

use chrono::Duration;
use dashmap::DashMap;
use crate::models::{CachedStream, StreamSlot};

/// In-memory stream status, keyed by normalized login name.
///
/// Holds nothing across restarts. A name that is absent from the map has
/// never been resolved; a name mapped to [`CachedStream::Offline`] is a
/// confirmed "exists, not live".
pub struct StreamCache {
    entries: DashMap<String, CachedStream>,
    ttl: Duration,
}

impl StreamCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cloned out so no map guard outlives the call.
    pub fn get(&self, name: &str) -> Option<CachedStream> {
        self.entries.get(name).map(|entry| entry.value().clone())
    }

    pub fn slot(&self, name: &str) -> StreamSlot {
        StreamSlot::from(self.get(name))
    }

    pub fn insert(&self, name: &str, cached: CachedStream) {
        self.entries.insert(name.to_string(), cached);
    }

    pub fn invalidate(&self, name: &str) {
        self.entries.remove(name);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
