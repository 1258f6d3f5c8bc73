//! Key/value stores a memoized function can keep its results in.
//!
//! Any type implementing [`CacheStore`] can back a [`crate::memoizer::Memoized`],
//! so callers can swap the default unbounded `HashMap` for a bounded store
//! such as [`cached::SizedCache`] without changing how the wrapper is called.

use cached::{Cached, SizedCache, UnboundCache};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Minimal map capabilities required from a memoization cache.
///
/// Reads take `&mut self`: LRU stores reorder entries on access.
pub trait CacheStore<K, V> {
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Stores `value` under `key`, returning the previous value if any.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    fn has(&mut self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key`, returning its value if it was present.
    fn delete(&mut self, key: &K) -> Option<V>;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> CacheStore<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn has(&mut self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K: Ord, V> CacheStore<K, V> for BTreeMap<K, V> {
    fn get(&mut self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn has(&mut self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// Least-recently-used store holding at most `size` entries.
impl<K, V> CacheStore<K, V> for SizedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        self.cache_get(key)
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.cache_set(key, value)
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        self.cache_remove(key)
    }

    fn clear(&mut self) {
        self.cache_clear()
    }

    fn len(&self) -> usize {
        self.cache_size()
    }
}

impl<K, V> CacheStore<K, V> for UnboundCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        self.cache_get(key)
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.cache_set(key, value)
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        self.cache_remove(key)
    }

    fn clear(&mut self) {
        self.cache_clear()
    }

    fn len(&self) -> usize {
        self.cache_size()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn exercise<C: CacheStore<&'static str, u32>>(store: &mut C) {
        assert!(store.is_empty());
        assert_eq!(store.set("a", 1), None);
        assert_eq!(store.set("b", 2), None);
        assert_eq!(store.set("a", 10), Some(1));
        assert!(store.has(&"a"));
        assert_eq!(store.get(&"a"), Some(&10));
        assert_eq!(store.len(), 2);
        assert_eq!(store.delete(&"b"), Some(2));
        assert!(!store.has(&"b"));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn hash_map_store() {
        exercise(&mut HashMap::new());
    }

    #[test]
    fn btree_map_store() {
        exercise(&mut BTreeMap::new());
    }

    #[test]
    fn unbound_store() {
        exercise(&mut UnboundCache::new());
    }

    #[test]
    fn sized_store() {
        exercise(&mut SizedCache::with_size(4));
    }

    #[test]
    fn sized_store_evicts_least_recently_used() {
        let mut store = SizedCache::with_size(2);
        store.set(1, "one");
        store.set(2, "two");
        // touch 1 so that 2 becomes the eviction candidate
        assert_eq!(CacheStore::get(&mut store, &1), Some(&"one"));
        store.set(3, "three");
        assert_eq!(CacheStore::len(&store), 2);
        assert!(store.has(&1));
        assert!(!store.has(&2));
        assert!(store.has(&3));
    }
}
