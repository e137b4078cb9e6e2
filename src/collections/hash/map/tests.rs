#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::hash::{Collider, IdentityBuildHasher};

type ColliderMap<V> = HashMap<Collider<&'static str>, V, IdentityBuildHasher>;

fn chain_lengths<K: std::hash::Hash + Eq, V, B: BuildHasher>(map: &HashMap<K, V, B>) -> Vec<usize> {
    map.arr.iter().map(|b| b.as_ref().map_or(0, |chain| chain.len())).collect()
}

#[test]
fn test_resize_at_threshold() {
    let mut map: HashMap<i32, &str> = HashMap::with_cap_and_load_factor(3, 0.75).unwrap();
    assert_eq!(map.cap(), 3);
    assert_eq!(map.threshold(), 2);

    map.insert(1, "a");
    map.insert(2, "b");
    assert_eq!(map.cap(), 3, "Reaching the threshold shouldn't resize.");

    map.insert(3, "c");
    assert_eq!(map.cap(), 6, "Exceeding the threshold should double the capacity once.");
    assert_eq!(map.threshold(), 4);

    assert_eq!(map.get(&1), Some(&"a"));
    assert_eq!(map.get(&2), Some(&"b"));
    assert_eq!(map.get(&3), Some(&"c"));
    assert_eq!(map.len(), 3);
}

#[test]
fn test_overwrite_returns_old_value() {
    let mut map = HashMap::<String, u32>::new();
    assert_eq!(map.insert("k".into(), 1), None);
    assert_eq!(map.insert("k".into(), 2), Some(1));
    assert_eq!(map.get("k"), Some(&2));
    assert_eq!(map.len(), 1, "Overwriting shouldn't change the length.");
}

#[test]
fn test_missing_keys() {
    let mut map: HashMap<u8, u8> = (0..10).map(|i| (i, i)).collect();
    assert_eq!(map.get(&42), None);
    assert_eq!(map.get_mut(&42), None);
    assert_eq!(map.remove(&42), None);
    assert!(!map.contains_key(&42));
    assert_eq!(map.len(), 10, "Missing keys shouldn't change anything.");

    let mut empty: HashMap<u8, u8> = HashMap::new();
    assert_eq!(empty.remove(&0), None);
    assert!(empty.is_empty());
}

#[test]
fn test_collisions_share_a_chain() {
    let mut map: ColliderMap<u8> = HashMap::with_cap_and_hasher(8, IdentityBuildHasher);
    map.insert(Collider::new(1, "a"), 1);
    map.insert(Collider::new(1, "b"), 2);
    map.insert(Collider::new(9, "c"), 3);
    map.insert(Collider::new(2, "d"), 4);

    assert_eq!(chain_lengths(&map), [0, 3, 1, 0, 0, 0, 0, 0]);
    assert_eq!(map.get(&Collider::new(1, "b")), Some(&2));
    assert_eq!(map.get(&Collider::new(9, "c")), Some(&3));
    assert_eq!(map.get(&Collider::new(1, "c")), None, "Equal values with other hashes differ.");

    assert_eq!(map.remove(&Collider::new(1, "a")), Some(1));
    assert_eq!(map.remove(&Collider::new(1, "b")), Some(2));
    assert_eq!(map.remove(&Collider::new(9, "c")), Some(3));
    assert!(map.arr[1].is_none(), "An emptied chain should be dropped from its bucket.");
    assert_eq!(map.len(), 1);
}

#[test]
fn test_resize_reuses_stored_hashes() {
    let mut map: ColliderMap<()> = HashMap::with_cap_and_hasher(3, IdentityBuildHasher);
    for (hash, value) in [(0, "a"), (4, "b"), (5, "c")] {
        map.insert(Collider::new(hash, value), ());
    }

    assert_eq!(map.cap(), 6);
    assert_eq!(chain_lengths(&map), [1, 0, 0, 0, 1, 1]);
    for bucket in map.arr.iter().flatten() {
        for entry in bucket.iter() {
            assert_eq!(entry.hash, entry.key.hash, "Small hashes aren't changed by spreading.");
        }
    }
}

#[test]
fn test_spread_folds_high_bits() {
    assert_eq!(spread(7), 7);
    assert_eq!(spread(1 << 32), (1 << 32) | 1);

    let mut map: ColliderMap<u8> = HashMap::with_cap_and_hasher(4, IdentityBuildHasher);
    map.insert(Collider::new(1 << 33, "high"), 0);
    assert_eq!(chain_lengths(&map), [0, 0, 1, 0], "Only the high bits differ from 0.");
}

#[rstest]
#[case(0.0)]
#[case(-1.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn test_invalid_load_factor(#[case] load_factor: f64) {
    let result = HashMap::<u8, u8>::with_cap_and_load_factor(8, load_factor);
    assert!(matches!(result, Err(InvalidArgument { .. })));

    let result = HashMap::<u8, u8, _>::with_config(8, load_factor, RandomState::new());
    assert!(result.is_err());
}

#[rstest]
#[case(0, 3)]
#[case(2, 3)]
#[case(3, 3)]
#[case(17, 17)]
fn test_minimum_capacity(#[case] requested: usize, #[case] expected: usize) {
    let map: HashMap<u8, u8> = HashMap::with_cap(requested);
    assert_eq!(map.cap(), expected);
    assert_eq!(map.load_factor(), DEFAULT_LOAD_FACTOR);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut map: HashMap<u16, u16> = (0..50).map(|i| (i, i)).collect();
    let cap = map.cap();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.cap(), cap);
    assert_eq!(map.iter().count(), 0);
    assert_eq!(map.get(&3), None);
}

#[test]
fn test_iterators() {
    let mut map: HashMap<u8, u32> = (1..=5).map(|i| (i, u32::from(i) * 10)).collect();

    let mut keys: Vec<_> = map.keys().copied().collect();
    keys.sort();
    assert_eq!(keys, [1, 2, 3, 4, 5]);

    for value in map.values_mut() {
        *value += 1;
    }
    assert_eq!(map.values().sum::<u32>(), 155);
    assert_eq!(map.iter().len(), 5);
    assert_eq!(map.get_entry(&3), Some((&3, &31)));

    let mut values: Vec<_> = map.clone().into_values().collect();
    values.sort();
    assert_eq!(values, [11, 21, 31, 41, 51]);
    assert_eq!(map.clone().into_keys().count(), 5);
    assert_eq!(map.into_iter().map(|(k, _)| u32::from(k)).sum::<u32>(), 15);
}

#[test]
fn test_equality_and_formatting() {
    let a: HashMap<u8, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
    let mut b: HashMap<u8, char> = HashMap::with_cap(32);
    b.extend([(2, 'b'), (1, 'a')]);
    assert_eq!(a, b, "Equality shouldn't depend on capacity or order.");
    b.insert(2, 'c');
    assert_ne!(a, b);

    let mut map: ColliderMap<u8> = HashMap::with_cap_and_hasher(3, IdentityBuildHasher);
    map.insert(Collider::new(1, "x"), 1);
    map.insert(Collider::new(1, "y"), 2);
    let debug = format!("{map:?}");
    assert!(debug.contains("buckets: [-, (Collider { hash: 1, value: \"x\" }: 1) -> (Collider { hash: 1, value: \"y\" }: 2), -]"));

    let single: HashMap<u8, char> = [(1, 'a')].into_iter().collect();
    assert_eq!(single.to_string(), "{1: 'a'}");
}

#[test]
fn test_entry_equality_ignores_values() {
    let entry = Entry { hash: 9, key: "k", value: 1 };
    assert_eq!(entry, Entry { hash: 9, key: "k", value: 2 });
    assert_ne!(entry, Entry { hash: 8, key: "k", value: 1 });
    assert!(entry.matches(9, "k"));
    assert!(!entry.matches(9, "j"));
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut map: HashMap<u8, _> = (0..20).map(|i| (i, counter.track())).collect();

    drop(map.insert(3, counter.track()));
    assert_eq!(counter.dropped(), 1, "The replaced value should be handed back and dropped.");
    drop(map.remove(&4));
    assert_eq!(counter.dropped(), 2);

    map.clear();
    assert_eq!(counter.dropped(), 21);
}

proptest! {
    #[test]
    fn prop_matches_std_hash_map(ops in prop::collection::vec((0_u8..3, 0_u16..64, any::<u32>()), 0..300)) {
        let mut map = HashMap::<u16, u32>::new();
        let mut model = std::collections::HashMap::new();

        for (op, key, value) in ops {
            match op {
                0 => {
                    prop_assert_eq!(map.insert(key, value), model.insert(key, value));
                },
                1 => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                },
                _ => {
                    prop_assert_eq!(map.get(&key), model.get(&key));
                },
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert!(map.len() <= map.threshold());
            prop_assert_eq!(chain_lengths(&map).iter().sum::<usize>(), map.len());
        }

        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value));
        }
    }
}
