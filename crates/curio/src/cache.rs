//! Short-lived cache for slow-moving marketplace statistics.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A small time-to-live cache.
///
/// Market-wide statistics (ideal distributions, peer catalogue sizes)
/// change slowly, so analyses within the TTL window reuse the previous
/// fetch. The lock is held only for map access.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, (Instant, V)>>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    /// Create a cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Get a live entry, if present.
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.lock().expect("cache lock poisoned");
        entries
            .get(key)
            .filter(|(stored_at, _)| stored_at.elapsed() < self.ttl)
            .map(|(_, value)| value.clone())
    }

    /// Insert or refresh an entry.
    pub fn put(&self, key: K, value: V) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(key, (Instant::now(), value));
    }
}
