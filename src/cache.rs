use dashmap::DashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Writes between sweeps of expired entries
pub const SWEEP_EVERY: usize = 128;

/// Key/value cache with per-entry time to live
pub trait Cache<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn put(&self, key: K, value: V, ttl: Duration);
}

/// In-memory cache; expired entries are dropped when read and swept
/// every `SWEEP_EVERY` writes, so keys that are never read again do not pile up
pub struct TtlCache<K, V> {
    entries: DashMap<K, (V, Instant)>,
    writes: AtomicUsize,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            writes: AtomicUsize::new(0),
        }
    }

    /// Drop every expired entry
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, (_, expires_at)| now < *expires_at);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> for TtlCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Option<V> {
        {
            let entry = self.entries.get(key)?;
            let (value, expires_at) = entry.value();
            if Instant::now() < *expires_at {
                return Some(value.clone());
            }
        }
        // a concurrent put may have refreshed the entry since the read guard dropped
        self.entries
            .remove_if(key, |_, (_, expires_at)| Instant::now() >= *expires_at);
        None
    }

    fn put(&self, key: K, value: V, ttl: Duration) {
        self.entries.insert(key, (value, Instant::now() + ttl));
        if (self.writes.fetch_add(1, Ordering::Relaxed) + 1) % SWEEP_EVERY == 0 {
            self.purge_expired();
        }
    }
}
