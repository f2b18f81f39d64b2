use std::hash::Hash;
use std::time::{Duration, Instant};

use moka::sync::Cache;
use moka::Expiry;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    ttl: Duration,
}

/// Expires each entry after the TTL it was inserted with.
struct EntryTtl;

impl<K, V> Expiry<K, CacheEntry<V>> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &K,
        entry: &CacheEntry<V>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &K,
        entry: &CacheEntry<V>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Bounded in-memory cache for backend responses.
///
/// Entries expire after their TTL and are never returned once expired.
/// Size is bounded by moka's admission/eviction policy.
pub struct TtlCache<K, V> {
    inner: Cache<K, CacheEntry<V>>,
    default_ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(capacity.max(1) as u64)
                .expire_after(EntryTtl)
                .build(),
            default_ttl,
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).map(|entry| entry.value)
    }

    pub fn insert(&self, key: K, value: V) {
        self.insert_with_ttl(key, value, self.default_ttl);
    }

    pub fn insert_with_ttl(&self, key: K, value: V, ttl: Duration) {
        self.inner.insert(key, CacheEntry { value, ttl });
    }

    pub fn invalidate(&self, key: &K) -> bool {
        self.inner.remove(key).is_some()
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
        self.inner.run_pending_tasks();
    }

    /// Apply pending evictions and drop expired entries now.
    pub fn purge_expired(&self) {
        self.inner.run_pending_tasks();
    }

    pub fn len(&self) -> usize {
        self.inner.run_pending_tasks();
        self.inner.entry_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
