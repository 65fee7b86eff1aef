use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Process-wide TTL key-value cache for derived scoring results.
///
/// Entries expire lazily on lookup. Writes are last-write-wins: concurrent
/// requests computing the same key may both recompute and overwrite, which is
/// harmless since cached values are derived, never authoritative.
#[derive(Clone)]
pub struct TtlCache<V> {
    entries: Arc<RwLock<HashMap<String, Entry<V>>>>,
}

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().expect("cache lock poisoned");
        entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone())
    }

    pub fn set(&self, key: &str, value: V, ttl: Duration) {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
        // Expired entries are dropped opportunistically on write so the map
        // does not grow without bound under churning keys.
        entries.retain(|_, entry| entry.expires_at > Instant::now());
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_stored_value() {
        let cache = TtlCache::new();
        cache.set("k", 42, Duration::from_secs(60));
        assert_eq!(cache.get("k"), Some(42));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let cache: TtlCache<i64> = TtlCache::new();
        assert_eq!(cache.get("nope"), None);
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let cache = TtlCache::new();
        cache.set("k", 1, Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(25));
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let cache = TtlCache::new();
        cache.set("k", 1, Duration::from_secs(60));
        cache.set("k", 2, Duration::from_secs(60));
        assert_eq!(cache.get("k"), Some(2));
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = TtlCache::new();
        let other = cache.clone();
        cache.set("k", 7, Duration::from_secs(60));
        assert_eq!(other.get("k"), Some(7));
    }
}
