#![cfg(test)]

use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::util::alloc::DropCounter;

fn keys_of<V>(tree: &AvlTreeMap<i32, V>) -> Vec<i32> {
    tree.keys().copied().collect()
}

#[test]
fn test_remove_keeps_order() {
    let mut tree = AvlTreeMap::new();
    for key in [5, 2, 10, 8, 7, 11] {
        assert!(tree.put(key, key * 10));
        tree.verify();
    }

    assert_eq!(tree.remove(&10), Some(100));
    tree.verify();
    assert_eq!(keys_of(&tree), [2, 5, 7, 8, 11]);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.get(&10), None);
}

#[test]
fn test_values_in_key_order() {
    let mut tree = AvlTreeMap::new();
    for key in [32, 4, 9, 23] {
        tree.put(key, key.to_string());
    }

    assert_eq!(tree.len(), 4);
    assert_eq!(
        tree.values().map(String::as_str).collect::<Vec<_>>(),
        ["4", "9", "23", "32"]
    );
    assert_eq!(tree.to_string(), r#"{4: "4", 9: "9", 23: "23", 32: "32"}"#);
}

#[test]
fn test_first_write_wins() {
    let mut tree = AvlTreeMap::new();
    assert!(tree.put(5, "a"));
    assert!(!tree.put(5, "b"));
    assert_eq!(tree.get(&5), Some(&"a"));
    assert_eq!(tree.len(), 1);

    let collected: AvlTreeMap<u8, char> = [(1, 'x'), (1, 'y')].into_iter().collect();
    assert_eq!(collected.get(&1), Some(&'x'), "Collecting should keep the first occurrence.");
}

#[rstest]
#[case::right_right([1, 2, 3], 2)]
#[case::left_left([3, 2, 1], 2)]
#[case::left_right([3, 1, 2], 2)]
#[case::right_left([1, 3, 2], 2)]
fn test_single_and_double_rotations(#[case] keys: [i32; 3], #[case] root: i32) {
    let tree: AvlTreeMap<i32, ()> = keys.into_iter().map(|k| (k, ())).collect();
    tree.verify();
    assert_eq!(tree.root.as_ref().map(|n| n.key), Some(root));
    assert_eq!(tree.height(), Some(1));
}

#[test]
fn test_sequential_inserts_stay_logarithmic() {
    let tree: AvlTreeMap<i32, i32> = (0..1023).map(|k| (k, k)).collect();
    tree.verify();
    assert_eq!(tree.height(), Some(9), "A perfect tree of 1023 nodes has height 9.");
    assert_eq!(tree.first(), Some((&0, &0)));
    assert_eq!(tree.last(), Some((&1022, &1022)));
}

#[test]
fn test_remove_cases() {
    let mut tree: AvlTreeMap<i32, ()> = (1..=15).map(|k| (k, ())).collect();

    assert_eq!(tree.remove(&100), None, "Removing a missing key should be a no-op.");
    assert_eq!(tree.len(), 15);

    // Leaf, single child and two children.
    assert_eq!(tree.remove_entry(&1), Some((1, ())));
    assert!(tree.remove(&2).is_some());
    assert!(tree.remove(&8).is_some());
    tree.verify();
    assert_eq!(keys_of(&tree), [3, 4, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15]);

    while let Some((&first, _)) = tree.first() {
        tree.remove(&first);
        tree.verify();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), None);
}

#[test]
fn test_get_mut_and_contains() {
    let mut tree: AvlTreeMap<String, u32> = ["a", "b", "c"]
        .into_iter()
        .map(|k| (k.to_owned(), 0))
        .collect();

    *tree.get_mut("b").unwrap() += 5;
    assert_eq!(tree.get("b"), Some(&5));
    assert!(tree.contains("c"));
    assert!(!tree.contains("d"));
    assert_eq!(tree.get_entry("a"), Some((&String::from("a"), &0)));
}

#[test]
fn test_iterators() {
    let tree: AvlTreeMap<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();

    let mut iter = tree.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some((&1, &'a')));
    let rest = iter.clone();
    assert_eq!(iter.collect::<Vec<_>>(), [(&2, &'b'), (&3, &'c')]);
    assert_eq!(rest.count(), 2, "Clones should continue independently.");

    assert_eq!(tree.iter().count(), 3, "Borrowed iteration can restart from the tree.");
    assert_eq!(tree.clone().into_iter().collect::<Vec<_>>(), [(1, 'a'), (2, 'b'), (3, 'c')]);
    assert_eq!(tree, tree.clone());
}

#[test]
fn test_cursor_fails_after_structural_change() {
    let mut tree: AvlTreeMap<i32, i32> = (0..5).map(|k| (k, k)).collect();
    let mut cursor = tree.cursor();

    assert_eq!(cursor.next(&tree), Ok(Some((&0, &0))));
    assert_eq!(cursor.next(&tree), Ok(Some((&1, &1))));

    tree.put(10, 10);
    assert_eq!(cursor.next(&tree), Err(ConcurrentModification));
    assert!(!cursor.is_valid_for(&tree));

    cursor.restart(&tree);
    assert_eq!(cursor.next(&tree), Ok(Some((&0, &0))));

    tree.remove(&3);
    assert!(cursor.next(&tree).is_err());
    cursor.restart(&tree);
    tree.clear();
    assert!(cursor.next(&tree).is_err());
}

#[test]
fn test_cursor_survives_non_structural_changes() {
    let mut tree: AvlTreeMap<i32, i32> = (0..4).map(|k| (k, k)).collect();
    let mut cursor = tree.cursor();
    assert_eq!(cursor.next(&tree), Ok(Some((&0, &0))));

    assert!(!tree.put(2, 99));
    assert_eq!(tree.remove(&50), None);
    *tree.get_mut(&1).unwrap() = 11;

    let mut rest = Vec::new();
    while let Some((k, v)) = cursor.next(&tree).unwrap() {
        rest.push((*k, *v));
    }
    assert_eq!(rest, [(1, 11), (2, 2), (3, 3)]);
    assert_eq!(cursor.next(&tree), Ok(None), "A finished cursor stays finished.");
}

#[test]
fn test_cursor_steps_around_value_mutation() {
    let mut tree: AvlTreeMap<i32, i32> = (0..100).rev().map(|k| (k, k)).collect();
    let mut cursor = tree.cursor();

    let mut seen = Vec::new();
    while let Some((&k, &v)) = cursor.next(&tree).unwrap() {
        seen.push((k, v));
        if let Some(value) = tree.get_mut(&k) {
            *value = -k;
        }
        if let Some(value) = tree.get_mut(&(k + 1)) {
            *value += 1000;
        }
    }

    let expected: Vec<_> = (0..100).map(|k| (k, if k == 0 { 0 } else { k + 1000 })).collect();
    assert_eq!(seen, expected, "Every entry should be visited once, showing earlier value changes.");
    assert!(tree.values().zip(0..100).all(|(&v, k)| v == -k));
}

#[test]
fn test_cursor_over_empty_tree() {
    let tree: AvlTreeMap<i32, i32> = AvlTreeMap::new();
    let mut cursor = tree.cursor();
    assert_eq!(cursor.next(&tree), Ok(None));
    assert_eq!(cursor.next(&tree), Ok(None));

    let mut clone = cursor.clone();
    assert!(clone.is_valid_for(&tree));
    assert_eq!(clone.next(&tree), Ok(None));
}

#[test]
fn test_cursor_rejects_other_trees() {
    let tree: AvlTreeMap<i32, ()> = (0..3).map(|k| (k, ())).collect();
    let copy = tree.clone();
    let mut cursor = tree.cursor();
    assert!(cursor.next(&copy).is_err());
    assert!(cursor.next(&tree).is_ok());
}

#[test]
fn test_debug_draws_tree() {
    let tree: AvlTreeMap<i32, char> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    let debug = format!("{tree:?}");
    assert!(debug.contains("┌    (1: 'a')"));
    assert!(debug.contains("\n(2: 'b')\n"));
    assert!(debug.contains("└    (3: 'c')"));
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut tree: AvlTreeMap<i32, _> = (0..20).map(|k| (k, counter.track())).collect();

    drop(tree.remove(&7));
    assert_eq!(counter.dropped(), 1);

    let mut iter = tree.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.dropped(), 20);
}

proptest! {
    #[test]
    fn prop_balanced_after_every_operation(ops in prop::collection::vec((any::<bool>(), 0_i32..64), 0..300)) {
        let mut tree = AvlTreeMap::new();
        let mut model = std::collections::BTreeMap::new();

        for (insert, key) in ops {
            if insert {
                let expected = !model.contains_key(&key);
                model.entry(key).or_insert(key);
                prop_assert_eq!(tree.put(key, key), expected);
            } else {
                prop_assert_eq!(tree.remove(&key), model.remove(&key));
            }
            tree.verify();
        }

        prop_assert!(tree.iter().eq(model.iter()));
        let bound = 1.45 * ((tree.len() + 2) as f64).log2();
        prop_assert!(tree.height().is_none_or(|h| (h as f64) <= bound));
    }
}
