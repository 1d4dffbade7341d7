use std::hash::Hash;
use rustc_hash::FxHashMap;

/// Keyed get-or-construct cache.
///
/// A thin wrapper over a hash map with get-or-add semantics: a value is
/// constructed at most once per key and lives for the cache's lifetime.
/// There is no invalidation and no eviction.
///
/// # Example
///
/// ```ignore
/// let mut cache: Cache<&str, u32> = Cache::new();
/// let a = *cache.get_or_insert_with("answer", || 42);
/// let b = *cache.get_or_insert_with("answer", || unreachable!());
/// assert_eq!(a, b);
/// ```
pub struct Cache<K, V> {
    entries: FxHashMap<K, V>,
}

impl<K: Eq + Hash, V> Cache<K, V> {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Get the cached value for `key`, if one exists
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Get the value for `key`, constructing and storing it on first request
    ///
    /// The constructor runs only when `key` is absent; an existing entry is
    /// returned untouched.
    pub fn get_or_insert_with<F>(&mut self, key: K, construct: F) -> &V
    where
        F: FnOnce() -> V,
    {
        self.entries.entry(key).or_insert_with(construct)
    }

    /// Whether a value is cached for `key`
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
