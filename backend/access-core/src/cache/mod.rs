//! Time-bounded memoization for slow-changing reads.
//!
//! - Entries are valid strictly until `inserted_at + ttl`; an expired entry is
//!   never served, it is recomputed
//! - A failed producer caches nothing and leaves other entries untouched
//! - Concurrent misses for the same key may both run the producer; the last
//!   successful one wins
//!
//! Time comes from `tokio::time::Instant`, so tests can pause and advance it.

mod key;

pub use key::cache_key;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use log::debug;
use tokio::time::Instant;

/// Validity window used by the stats reads.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10);

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) < self.ttl
    }
}

/// Key→value cache with per-entry expiry.
///
/// Unbounded by default. [`TtlCache::with_max_entries`] caps the entry count;
/// when full, expired entries go first, then the oldest insertion.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    max_entries: Option<usize>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_entries: None,
        }
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_entries: Some(max_entries.max(1)),
        }
    }

    /// Return the cached value for `key` if it is younger than its TTL,
    /// otherwise await `producer` and cache its success.
    ///
    /// The lock is never held across the await.
    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: &str,
        ttl: Duration,
        producer: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            debug!("Cache hit: {key}");
            return Ok(value);
        }

        debug!("Cache miss: {key}");
        let value = producer().await?;
        self.insert(key, value.clone(), ttl);
        Ok(value)
    }

    /// Fresh value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        self.lock()
            .get(key)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| entry.value.clone())
    }

    /// Store `value` under `key`, stamped now.
    pub fn insert(&self, key: &str, value: V, ttl: Duration) {
        let now = Instant::now();
        let mut entries = self.lock();

        if let Some(max) = self.max_entries {
            if !entries.contains_key(key) && entries.len() >= max {
                entries.retain(|_, entry| entry.is_fresh(now));
            }
            if !entries.contains_key(key) && entries.len() >= max {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.inserted_at)
                    .map(|(oldest_key, _)| oldest_key.clone());
                if let Some(oldest) = oldest {
                    debug!("Cache full, evicting {oldest}");
                    entries.remove(&oldest);
                }
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: now,
                ttl,
            },
        );
    }

    pub fn invalidate(&self, key: &str) {
        self.lock().remove(key);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_fresh(now));
        before - entries.len()
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
