//! Query result memo
//!
//! Bounded LRU cache with per-read expiry, keyed by the exact query text.
//! `get` enforces the max age (an entry past it is dropped and reported as a
//! miss), `put` enforces the entry bound by evicting the least recently used
//! key.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::debug;

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

struct CacheInner<V> {
    map: HashMap<String, CacheEntry<V>>,
    /// Keys from least to most recently used
    order: Vec<String>,
}

impl<V> CacheInner<V> {
    fn touch(&mut self, key: &str) {
        if let Some(position) = self.order.iter().position(|k| k == key) {
            let key = self.order.remove(position);
            self.order.push(key);
        }
    }

    fn remove(&mut self, key: &str) {
        self.map.remove(key);
        if let Some(position) = self.order.iter().position(|k| k == key) {
            self.order.remove(position);
        }
    }
}

/// LRU-with-expiry memo for fetched query results
pub struct QueryCache<V> {
    inner: Mutex<CacheInner<V>>,
    max_entries: usize,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                map: HashMap::new(),
                order: Vec::new(),
            }),
            max_entries: max_entries.max(1),
        }
    }

    /// Return the cached value for `key` unless it is older than `max_age`.
    pub async fn get(&self, key: &str, max_age: Duration) -> Option<V> {
        let mut inner = self.inner.lock().await;

        let fresh = match inner.map.get(key) {
            Some(entry) => entry.inserted_at.elapsed() < max_age,
            None => return None,
        };

        if !fresh {
            debug!(key, "Cache entry expired");
            inner.remove(key);
            return None;
        }

        inner.touch(key);
        inner.map.get(key).map(|entry| entry.value.clone())
    }

    /// Insert a value, evicting the least recently used entry when full.
    pub async fn put(&self, key: String, value: V) {
        let mut inner = self.inner.lock().await;

        inner.remove(&key);
        inner.map.insert(
            key.clone(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
        inner.order.push(key);

        while inner.map.len() > self.max_entries {
            let evicted = inner.order.remove(0);
            inner.map.remove(&evicted);
            debug!(key = %evicted, "Evicted least recently used cache entry");
        }
    }
}
