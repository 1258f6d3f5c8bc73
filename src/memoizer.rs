//! Memoizing function wrappers.
//!
//! A [`Memoized`] owns the wrapped function, a key resolver and a cache
//! store. Each call resolves a key from the arguments; when the store already
//! holds a value for that key it is returned without invoking the function,
//! otherwise the function runs and its result is stored.
//!
//! By default the key is the *first* argument. Functions of several
//! arguments take them as a tuple, and [`memoize_args`] keys them by the
//! tuple's first element only: `f(1, 2)` and `f(1, 5)` share one entry.
//! Supply a resolver with [`memoize_with`] when the other arguments matter.
//!
//! The store grows without bound unless a bounded [`CacheStore`] is supplied.

use crate::cache_store::CacheStore;
use crate::error::{Error, Result};
use log::{debug, trace};
use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

type Function<A, V, E> = Box<dyn Fn(A) -> std::result::Result<V, E>>;
type KeyResolver<A, K> = Box<dyn Fn(&A) -> K>;

/// Call arguments whose first element can serve as a cache key.
pub trait Arguments {
    type First;

    fn first(&self) -> Self::First;
}

/// No arguments: every call shares the unit key.
impl Arguments for () {
    type First = ();

    fn first(&self) -> Self::First {}
}

macro_rules! impl_arguments {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first: Clone $(, $rest)*> Arguments for ($first, $($rest,)*) {
            type First = $first;

            fn first(&self) -> Self::First {
                self.0.clone()
            }
        }
    };
}

impl_arguments!(A0);
impl_arguments!(A0, A1);
impl_arguments!(A0, A1, A2);
impl_arguments!(A0, A1, A2, A3);
impl_arguments!(A0, A1, A2, A3, A4);
impl_arguments!(A0, A1, A2, A3, A4, A5);

/// Key wrapper comparing smart pointers by address instead of by value.
///
/// Two structurally equal but distinct `Rc`s are different keys.
#[derive(Debug, Clone)]
pub struct ByAddress<P>(pub P);

impl<P: Deref> ByAddress<P> {
    fn address(&self) -> *const () {
        (&*self.0 as *const P::Target).cast::<()>()
    }
}

impl<P: Deref> PartialEq for ByAddress<P> {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl<P: Deref> Eq for ByAddress<P> {}

impl<P: Deref> Hash for ByAddress<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state)
    }
}

/// A function wrapped with a result cache.
///
/// `A` is the argument type, `K` the cache key, `V` the cached value, `E` the
/// error type of fallible functions and `C` the backing store.
pub struct Memoized<A, K, V, E = Infallible, C = HashMap<K, V>> {
    function: Function<A, V, E>,
    resolver: KeyResolver<A, K>,
    cache: C,
}

impl<A, K, V, E, C> Memoized<A, K, V, E, C>
where
    V: Clone,
    C: CacheStore<K, V>,
{
    /// Returns the cached value for the resolved key, or computes and caches it.
    ///
    /// An error from the wrapped function is returned as is and nothing is
    /// stored, so the next call with the same key runs the function again.
    pub fn try_call(&mut self, args: A) -> std::result::Result<V, E> {
        let key = (self.resolver)(&args);
        if let Some(value) = self.cache.get(&key) {
            trace!("memoized call: cache hit");
            return Ok(value.clone());
        }
        trace!("memoized call: cache miss");
        let value = (self.function)(args)?;
        self.cache.set(key, value.clone());
        Ok(value)
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Mutable access to the store, to seed, evict or clear entries.
    pub fn cache_mut(&mut self) -> &mut C {
        &mut self.cache
    }

    /// Swaps in a new store of the same type and returns the old one.
    pub fn replace_cache(&mut self, cache: C) -> C {
        debug!("replacing memoization cache holding {} entries", self.cache.len());
        std::mem::replace(&mut self.cache, cache)
    }

    /// Moves the wrapper onto a store of another type, e.g. a bounded one.
    pub fn with_cache<C2: CacheStore<K, V>>(self, cache: C2) -> Memoized<A, K, V, E, C2> {
        debug!("switching memoization cache ({} entries dropped)", self.cache.len());
        Memoized {
            function: self.function,
            resolver: self.resolver,
            cache,
        }
    }

    pub fn into_cache(self) -> C {
        self.cache
    }
}

impl<A, K, V, C> Memoized<A, K, V, Infallible, C>
where
    V: Clone,
    C: CacheStore<K, V>,
{
    /// Returns the cached value for the resolved key, or computes and caches it.
    pub fn call(&mut self, args: A) -> V {
        match self.try_call(args) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl<A, V, E> Memoized<A, A::First, V, E>
where
    A: Arguments + 'static,
    A::First: Eq + Hash,
    V: 'static,
    E: 'static,
{
    /// Starts a builder whose default resolver keys calls by their first argument.
    pub fn builder() -> MemoizeBuilder<A, A::First, V, E> {
        MemoizeBuilder::new().resolver(|args: &A| args.first())
    }
}

/// Memoizes a unary function; the argument itself is the cache key.
pub fn memoize<K, V, F>(function: F) -> Memoized<K, K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
    F: Fn(K) -> V + 'static,
{
    memoize_with(function, |key: &K| key.clone())
}

/// Memoizes `function` with keys computed by `resolver` from the arguments.
pub fn memoize_with<A, K, V, F, R>(function: F, resolver: R) -> Memoized<A, K, V>
where
    A: 'static,
    K: Eq + Hash + 'static,
    V: Clone + 'static,
    F: Fn(A) -> V + 'static,
    R: Fn(&A) -> K + 'static,
{
    Memoized {
        function: Box::new(move |args: A| Ok::<V, Infallible>(function(args))),
        resolver: Box::new(resolver),
        cache: HashMap::new(),
    }
}

/// Memoizes a function taking a tuple of arguments, keyed by the first one.
///
/// The remaining arguments do not take part in the key: once `f((1, 2))` is
/// cached, `f((1, 5))` returns the same value without calling `f`.
pub fn memoize_args<A, V, F>(function: F) -> Memoized<A, A::First, V>
where
    A: Arguments + 'static,
    A::First: Eq + Hash + 'static,
    V: Clone + 'static,
    F: Fn(A) -> V + 'static,
{
    memoize_with(function, |args: &A| args.first())
}

/// Memoizes a unary fallible function; only `Ok` results are cached.
pub fn memoize_fallible<K, V, E, F>(function: F) -> Memoized<K, K, V, E>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
    E: 'static,
    F: Fn(K) -> std::result::Result<V, E> + 'static,
{
    Memoized {
        function: Box::new(function),
        resolver: Box::new(|key: &K| key.clone()),
        cache: HashMap::new(),
    }
}

/// Step-by-step construction of a [`Memoized`].
///
/// [`MemoizeBuilder::build`] checks that a function and a resolver were
/// supplied and reports the missing one as [`Error::InvalidArgument`].
pub struct MemoizeBuilder<A, K, V, E = Infallible, C = HashMap<K, V>> {
    function: Option<Function<A, V, E>>,
    resolver: Option<KeyResolver<A, K>>,
    cache: C,
}

impl<A, K, V, E> MemoizeBuilder<A, K, V, E>
where
    K: Eq + Hash,
{
    /// A builder with no function, no resolver and an empty `HashMap` store.
    pub fn new() -> Self {
        MemoizeBuilder {
            function: None,
            resolver: None,
            cache: HashMap::new(),
        }
    }
}

impl<A, K, V, E> Default for MemoizeBuilder<A, K, V, E>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, K, V, E, C> MemoizeBuilder<A, K, V, E, C>
where
    A: 'static,
    V: 'static,
    E: 'static,
{
    pub fn function<F>(mut self, function: F) -> Self
    where
        F: Fn(A) -> V + 'static,
    {
        self.function = Some(Box::new(move |args: A| Ok::<V, E>(function(args))));
        self
    }

    pub fn fallible_function<F>(mut self, function: F) -> Self
    where
        F: Fn(A) -> std::result::Result<V, E> + 'static,
    {
        self.function = Some(Box::new(function));
        self
    }

    pub fn resolver<R>(mut self, resolver: R) -> Self
    where
        R: Fn(&A) -> K + 'static,
    {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Replaces the store the built wrapper will start with.
    pub fn cache<C2: CacheStore<K, V>>(self, cache: C2) -> MemoizeBuilder<A, K, V, E, C2> {
        MemoizeBuilder {
            function: self.function,
            resolver: self.resolver,
            cache,
        }
    }

    pub fn build(self) -> Result<Memoized<A, K, V, E, C>> {
        let function = self
            .function
            .ok_or_else(|| Error::InvalidArgument("a function to memoize is required".to_string()))?;
        let resolver = self
            .resolver
            .ok_or_else(|| Error::InvalidArgument("a key resolver is required".to_string()))?;
        Ok(Memoized {
            function,
            resolver,
            cache: self.cache,
        })
    }
}
