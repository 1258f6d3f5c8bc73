//! Slice and collection helpers.
//!
//! Results keep the order in which elements first appear in the input.

use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Splits `items` into groups of `size`; the last group holds the remainder.
/// A `size` of zero yields no groups.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(|c| c.to_vec()).collect()
}

/// Drops the `None` entries.
pub fn compact<T: Clone>(items: &[Option<T>]) -> Vec<T> {
    items.iter().flatten().cloned().collect()
}

pub fn uniq<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    items.iter().unique().cloned().collect()
}

/// Keeps the first element for each distinct `key`.
pub fn uniq_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    items.iter().unique_by(|item| key(item)).cloned().collect()
}

/// Elements of `items` absent from `excluded`.
pub fn difference<T: Eq + Hash + Clone>(items: &[T], excluded: &[T]) -> Vec<T> {
    let excluded: HashSet<&T> = excluded.iter().collect();
    items
        .iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}

/// Distinct elements of `left` that also occur in `right`.
pub fn intersection<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let right: HashSet<&T> = right.iter().collect();
    left.iter()
        .unique()
        .filter(|item| right.contains(item))
        .cloned()
        .collect()
}

pub fn union<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    left.iter().chain(right.iter()).unique().cloned().collect()
}

pub fn group_by<T, K, F>(items: &[T], key: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    items.iter().cloned().into_group_map_by(|item| key(item))
}

/// Indexes `items` by `key`; a later element replaces an earlier one.
pub fn key_by<T, K, F>(items: &[T], key: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    items.iter().map(|item| (key(item), item.clone())).collect()
}

pub fn count_by<T, K, F>(items: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    items.iter().counts_by(key)
}

/// Splits into the elements matching `predicate` and the rest.
pub fn partition<T, F>(items: &[T], predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    items.iter().cloned().partition(|item| predicate(item))
}

pub fn sum_by<T, F>(items: &[T], value: F) -> f64
where
    F: Fn(&T) -> f64,
{
    items.iter().map(value).sum()
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn chunk_keeps_remainder() {
        assert_eq!(chunk(&['a', 'b', 'c', 'd'], 2), vec![vec!['a', 'b'], vec!['c', 'd']]);
        assert_eq!(chunk(&['a', 'b', 'c', 'd'], 3), vec![vec!['a', 'b', 'c'], vec!['d']]);
        assert!(chunk(&[1, 2], 0).is_empty());
        assert!(chunk::<i32>(&[], 2).is_empty());
    }

    #[test]
    fn compact_drops_none() {
        assert_eq!(compact(&[Some(0), None, Some(1), None]), vec![0, 1]);
    }

    #[test]
    fn uniq_keeps_first_occurrence() {
        assert_eq!(uniq(&[2, 1, 2]), vec![2, 1]);
        let floors = uniq_by(&[2.1_f64, 1.2, 2.3], |x| x.floor() as i64);
        assert_eq!(floors, vec![2.1, 1.2]);
    }

    #[test]
    fn set_operations() {
        assert_eq!(difference(&[2, 1], &[2, 3]), vec![1]);
        assert_eq!(intersection(&[2, 1, 2], &[2, 3]), vec![2]);
        assert_eq!(union(&[2], &[1, 2]), vec![2, 1]);
    }

    #[test]
    fn grouping() {
        let groups = group_by(&[6.1_f64, 4.2, 6.3], |x| x.floor() as i64);
        assert_eq!(groups[&4], vec![4.2]);
        assert_eq!(groups[&6], vec![6.1, 6.3]);

        let words = ["one", "two", "three"];
        let counts = count_by(&words, |w| w.len());
        assert_eq!(counts[&3], 2);
        assert_eq!(counts[&5], 1);

        let keyed = key_by(&[("a", 1), ("b", 2), ("a", 3)], |(k, _)| *k);
        assert_eq!(keyed[&"a"], ("a", 3));
        assert_eq!(keyed.len(), 2);
    }

    #[test]
    fn partition_and_sums() {
        let (even, odd) = partition(&[1, 2, 3, 4], |n| n % 2 == 0);
        assert_eq!(even, vec![2, 4]);
        assert_eq!(odd, vec![1, 3]);
        assert_eq!(sum_by(&[(1, 4.0), (2, 2.0)], |(_, v)| *v), 6.0);
        assert_eq!(mean(&[4.0, 2.0, 8.0, 6.0]), Some(5.0));
        assert_eq!(mean(&[]), None);
    }
}
