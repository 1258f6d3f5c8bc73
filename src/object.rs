//! Helpers over key/value maps.

use std::collections::HashMap;
use std::hash::Hash;

/// Copies the entries whose key is listed in `keys`. Unknown keys are ignored.
pub fn pick<K, V>(map: &HashMap<K, V>, keys: &[K]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    keys.iter()
        .filter_map(|key| map.get_key_value(key))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Copies every entry except those whose key is listed in `keys`.
pub fn omit<K, V>(map: &HashMap<K, V>, keys: &[K]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    map.iter()
        .filter(|(k, _)| !keys.contains(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Swaps keys and values. When several keys share a value, which one
/// survives is unspecified.
pub fn invert<K, V>(map: &HashMap<K, V>) -> HashMap<V, K>
where
    K: Clone,
    V: Eq + Hash + Clone,
{
    map.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}

pub fn map_values<K, V, W, F>(map: &HashMap<K, V>, f: F) -> HashMap<K, W>
where
    K: Eq + Hash + Clone,
    F: Fn(&V) -> W,
{
    map.iter().map(|(k, v)| (k.clone(), f(v))).collect()
}

/// Fills in the keys of `source` that `target` lacks; existing entries win.
pub fn defaults<K, V>(target: &mut HashMap<K, V>, source: &HashMap<K, V>)
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    for (k, v) in source {
        target.entry(k.clone()).or_insert_with(|| v.clone());
    }
}

/// Copies every entry of `source` into `target`, overwriting existing ones.
pub fn assign<K, V>(target: &mut HashMap<K, V>, source: &HashMap<K, V>)
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    target.extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> HashMap<&'static str, i32> {
        HashMap::from([("a", 1), ("b", 2), ("c", 3)])
    }

    #[test]
    fn pick_and_omit() {
        let picked = pick(&sample(), &["a", "c", "z"]);
        assert_eq!(picked, HashMap::from([("a", 1), ("c", 3)]));
        let rest = omit(&sample(), &["a", "c"]);
        assert_eq!(rest, HashMap::from([("b", 2)]));
    }

    #[test]
    fn invert_and_map_values() {
        let inverted = invert(&sample());
        assert_eq!(inverted[&2], "b");
        let doubled = map_values(&sample(), |v| v * 2);
        assert_eq!(doubled[&"c"], 6);
    }

    #[test]
    fn defaults_keep_existing_entries() {
        let mut target = HashMap::from([("a", 1)]);
        defaults(&mut target, &HashMap::from([("a", 10), ("b", 20)]));
        assert_eq!(target, HashMap::from([("a", 1), ("b", 20)]));
    }

    #[test]
    fn assign_overwrites() {
        let mut target = HashMap::from([("a", 1)]);
        assign(&mut target, &HashMap::from([("a", 10), ("b", 20)]));
        assert_eq!(target, HashMap::from([("a", 10), ("b", 20)]));
    }
}
