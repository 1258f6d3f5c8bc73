//! Thread-safe memoization.
//!
//! [`SharedMemoized`] keeps its store behind a `Mutex` and can be called
//! through a shared reference, e.g. from an `Arc` handed to several threads.
//! The lock is released while the wrapped function runs, so two threads
//! missing on the same key may both compute it; the last write wins.

use crate::cache_store::CacheStore;
use log::trace;
use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

type SharedFunction<A, V, E> = Box<dyn Fn(A) -> Result<V, E> + Send + Sync>;
type SharedResolver<A, K> = Box<dyn Fn(&A) -> K + Send + Sync>;

pub struct SharedMemoized<A, K, V, E = Infallible, C = HashMap<K, V>> {
    function: SharedFunction<A, V, E>,
    resolver: SharedResolver<A, K>,
    cache: Mutex<C>,
}

impl<A, K, V, E, C> SharedMemoized<A, K, V, E, C>
where
    V: Clone,
    C: CacheStore<K, V>,
{
    /// Returns the cached value for the resolved key, or computes and caches it.
    /// Errors are passed through and never stored.
    pub fn try_call(&self, args: A) -> Result<V, E> {
        let key = (self.resolver)(&args);
        if let Some(value) = self.lock_cache().get(&key) {
            trace!("shared memoized call: cache hit");
            return Ok(value.clone());
        }
        trace!("shared memoized call: cache miss");
        let value = (self.function)(args)?;
        self.lock_cache().set(key, value.clone());
        Ok(value)
    }

    /// Locks the store for inspection or mutation. A poisoned lock is recovered.
    pub fn lock_cache(&self) -> MutexGuard<'_, C> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_cache<C2: CacheStore<K, V>>(self, cache: C2) -> SharedMemoized<A, K, V, E, C2> {
        SharedMemoized {
            function: self.function,
            resolver: self.resolver,
            cache: Mutex::new(cache),
        }
    }

    pub fn into_cache(self) -> C {
        self.cache.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A, K, V, C> SharedMemoized<A, K, V, Infallible, C>
where
    V: Clone,
    C: CacheStore<K, V>,
{
    pub fn call(&self, args: A) -> V {
        match self.try_call(args) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

/// Thread-safe counterpart of [`crate::memoizer::memoize`].
pub fn memoize_shared<K, V, F>(function: F) -> SharedMemoized<K, K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
    F: Fn(K) -> V + Send + Sync + 'static,
{
    memoize_shared_with(function, |key: &K| key.clone())
}

/// Thread-safe counterpart of [`crate::memoizer::memoize_with`].
pub fn memoize_shared_with<A, K, V, F, R>(function: F, resolver: R) -> SharedMemoized<A, K, V>
where
    A: 'static,
    K: Eq + Hash + 'static,
    V: Clone + 'static,
    F: Fn(A) -> V + Send + Sync + 'static,
    R: Fn(&A) -> K + Send + Sync + 'static,
{
    SharedMemoized {
        function: Box::new(move |args: A| Ok::<V, Infallible>(function(args))),
        resolver: Box::new(resolver),
        cache: Mutex::new(HashMap::new()),
    }
}

/// Thread-safe counterpart of [`crate::memoizer::memoize_fallible`].
pub fn memoize_shared_fallible<K, V, E, F>(function: F) -> SharedMemoized<K, K, V, E>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
    E: 'static,
    F: Fn(K) -> Result<V, E> + Send + Sync + 'static,
{
    SharedMemoized {
        function: Box::new(function),
        resolver: Box::new(|key: &K| key.clone()),
        cache: Mutex::new(HashMap::new()),
    }
}
