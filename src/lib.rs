//! Small, independent utility functions: array and map helpers, string
//! casing, numeric coercion and memoization.

pub mod array;
pub mod cache_store;
pub mod casing;
pub mod error;
pub mod memoizer;
pub mod number;
pub mod object;
pub mod shared;

pub use cache_store::CacheStore;
pub use error::{Error, Result};
pub use memoizer::{memoize, memoize_args, memoize_fallible, memoize_with, MemoizeBuilder, Memoized};
pub use shared::{memoize_shared, memoize_shared_fallible, memoize_shared_with, SharedMemoized};
