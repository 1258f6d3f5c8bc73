use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use toolbelt::cache_store::CacheStore;
use toolbelt::casing::{kebab_case, Case};
use toolbelt::{memoize, memoize_fallible, Error, MemoizeBuilder, Memoized};

fn counted<F: Fn(i32) -> i32 + 'static>(f: F) -> (Rc<Cell<usize>>, Memoized<i32, i32, i32>) {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let memoized = memoize(move |n: i32| {
        counter.set(counter.get() + 1);
        f(n)
    });
    (calls, memoized)
}

#[test]
fn test_double_runs_once() {
    let (calls, mut double) = counted(|n| n * 2);
    assert_eq!(double.call(2), 4);
    assert_eq!(double.call(2), 4);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_seeded_cache() {
    let (calls, mut square) = counted(|n| n * n);
    square.cache_mut().set(3, 9);
    assert_eq!(square.call(3), 9);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_independent_entries() {
    let (calls, mut double) = counted(|n| n * 2);
    double.call(2);
    double.call(3);
    double.cache_mut().delete(&2);
    assert_eq!(double.call(3), 6);
    assert_eq!(calls.get(), 2);
    assert_eq!(double.call(2), 4);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_missing_function_rejected_when_building() {
    let builder = MemoizeBuilder::<i32, i32, i32>::new().resolver(|n: &i32| *n);
    match builder.build() {
        Err(Error::InvalidArgument(message)) => assert!(message.contains("function")),
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("a builder without a function must not build"),
    }
}

#[test]
fn test_failures_retry() {
    let attempts = Rc::new(Cell::new(0));
    let counter = attempts.clone();
    let mut flaky = memoize_fallible(move |n: u32| {
        counter.set(counter.get() + 1);
        if counter.get() < 3 {
            Err("not yet")
        } else {
            Ok(n + 1)
        }
    });
    assert_eq!(flaky.try_call(1), Err("not yet"));
    assert_eq!(flaky.try_call(1), Err("not yet"));
    assert_eq!(flaky.try_call(1), Ok(2));
    assert_eq!(flaky.try_call(1), Ok(2));
    assert_eq!(attempts.get(), 3);
}

#[test]
fn test_memoized_case_conversion() {
    let mut kebab = memoize(|text: String| kebab_case(&text));
    assert_eq!(kebab.call("Hello World".to_string()), "hello-world");
    kebab
        .cache_mut()
        .set("Hello World".to_string(), "overridden".to_string());
    assert_eq!(kebab.call("Hello World".to_string()), "overridden");
    assert_eq!(Case::Snake.apply("Hello World"), "hello_world");
}

proptest! {
    #[test]
    fn invocations_match_distinct_keys(keys in prop::collection::vec(0u8..16, 0..64)) {
        let (calls, mut double) = counted(|n| n * 2);
        for &key in &keys {
            prop_assert_eq!(double.call(key as i32), key as i32 * 2);
        }
        let distinct: HashSet<u8> = keys.iter().copied().collect();
        prop_assert_eq!(calls.get(), distinct.len());
        prop_assert_eq!(double.cache().len(), distinct.len());
    }

    #[test]
    fn bounded_cache_never_exceeds_capacity(
        keys in prop::collection::vec(0u16..100, 0..200),
        size in 1usize..8,
    ) {
        let mut identity = memoize(|n: u16| n).with_cache(cached::SizedCache::with_size(size));
        for &key in &keys {
            prop_assert_eq!(identity.call(key), key);
            prop_assert!(identity.cache().len() <= size);
        }
    }
}
