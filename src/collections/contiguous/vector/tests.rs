#![cfg(test)]

use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_growth_doubles_and_never_shrinks() {
    let mut vec = Vector::new();
    let mut caps = Vector::new();
    for i in 0..9 {
        vec.push(i);
        caps.push(vec.cap());
    }
    assert_eq!(
        caps.to_string(),
        "[2, 2, 4, 4, 8, 8, 8, 8, 16]",
        "Capacity should start at the minimum and double each time the Vector fills."
    );

    while vec.pop().is_some() {}
    assert_eq!(vec.cap(), 16, "Popping shouldn't release capacity.");

    vec.extend(0..3);
    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 16, "Clearing shouldn't release capacity.");
}

#[test]
fn test_reserve() {
    let mut vec: Vector<u8> = Vector::with_cap(4);
    vec.reserve(2);
    assert_eq!(vec.cap(), 4, "Reserving within capacity should be a no-op.");

    vec.push(1);
    vec.reserve(10);
    assert_eq!(vec.cap(), 11);
    assert_eq!(*vec.get(0), 1);
}

#[rstest]
#[case(0, "[9, 0, 1, 2]")]
#[case(1, "[0, 9, 1, 2]")]
#[case(3, "[0, 1, 2, 9]")]
fn test_insert_positions(#[case] index: usize, #[case] expected: &str) {
    let mut vec: Vector<i32> = (0..3).collect();
    vec.insert(index, 9);
    assert_eq!(vec.to_string(), expected);
    assert_eq!(vec.len(), 4);
}

#[test]
fn test_index_errors() {
    let mut vec: Vector<i32> = (0..3).collect();

    assert_eq!(vec.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.try_remove(7), Err(IndexOutOfBounds { index: 7, len: 3 }));
    assert_eq!(vec.try_replace(3, 0), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.try_insert(4, 0), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(vec.to_string(), "[0, 1, 2]", "Failed operations shouldn't modify the Vector.");

    assert_panics!({ vec.get(3); }, contains "Index 3 out of bounds");
    assert_panics!({ vec.remove(3); }, contains "Index 3 out of bounds");
    assert_panics!({ vec[10] = 1; }, contains "Index 10 out of bounds");

    let empty: Vector<i32> = Vector::with_cap(4);
    assert!(empty.try_get(0).is_err(), "Capacity beyond len shouldn't be accessible.");
}

#[test]
fn test_remove_and_replace() {
    let mut vec: Vector<_> = "abcde".chars().collect();

    assert_eq!(vec.remove(0), 'a');
    assert_eq!(vec.remove(3), 'e');
    assert_eq!(vec.replace(1, 'x'), 'c');
    assert_eq!(vec.to_string(), "['b', 'x', 'd']");

    vec.swap(0, 2);
    assert_eq!(vec.to_string(), "['d', 'x', 'b']");

    assert_eq!(vec.index_of(&'b'), Some(2));
    assert!(vec.contains(&'x'));
    assert_eq!(vec.remove_item(&'x'), Some('x'));
    assert_eq!(vec.remove_item(&'x'), None);
    assert_eq!(vec.len(), 2);
}

#[test]
fn test_iterators() {
    let mut vec: Vector<usize> = (0..5).collect();

    for i in vec.iter_mut() {
        *i *= 2;
    }
    assert_eq!(vec.iter().copied().sum::<usize>(), 20);
    assert_eq!(vec.iter().rev().next(), Some(&8));

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.collect::<Vector<_>>(), (1..4).map(|i| i * 2).collect::<Vector<usize>>());
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut vec: Vector<_> = (0..10).map(|_| counter.track()).collect();

    drop(vec.remove(3));
    assert_eq!(counter.dropped(), 1);

    vec.clear();
    assert_eq!(counter.dropped(), 10, "Clearing should drop every element.");

    vec.extend((0..4).map(|_| counter.track()));
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.dropped(), 14, "Dropping an owned iterator should drop the rest.");
}

proptest! {
    #[test]
    fn prop_matches_std_vec(ops in prop::collection::vec((0_u8..4, any::<i16>(), 0_usize..20), 0..200)) {
        let mut vec = Vector::new();
        let mut model = Vec::new();

        for (op, value, index) in ops {
            match op {
                0 => {
                    vec.push(value);
                    model.push(value);
                },
                1 => {
                    prop_assert_eq!(vec.pop(), model.pop());
                },
                2 => {
                    let expected = (index <= model.len()).then(|| model.insert(index, value));
                    prop_assert_eq!(vec.try_insert(index, value).ok(), expected);
                },
                _ => {
                    let expected = (index < model.len()).then(|| model.remove(index));
                    prop_assert_eq!(vec.try_remove(index).ok(), expected);
                },
            }

            prop_assert_eq!(vec.len(), model.len());
            prop_assert!(vec.cap() >= vec.len());
        }

        prop_assert!(vec.iter().eq(model.iter()));
    }
}
