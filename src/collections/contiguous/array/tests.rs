#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::alloc::DropCounter;

#[test]
fn test_realloc() {
    let mut arr: Array<usize> = (0..5).collect();
    assert_eq!(arr.size(), 5);

    arr.realloc_with_default(0);
    assert_eq!(arr.size(), 0, "Reallocating to 0 should leave an empty Array.");

    arr.realloc_with_default(10);
    for i in 0..10 {
        arr[i] = i;
    }

    arr.realloc_with_default(15);
    for i in 0..10 {
        assert_eq!(
            arr[i], i,
            "When growing, all elements should remain in the Array."
        );
    }
    for i in 10..15 {
        assert_eq!(arr[i], 0, "When growing, all new elements should be 0.");
    }

    let counter = DropCounter::new();
    let mut arr = Array::repeat_with(|| counter.track(), 10);
    arr.realloc_with(|| unreachable!(), 5);

    assert_eq!(
        counter.dropped(),
        5,
        "5 elements should have been dropped during shrinking reallocation."
    );
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let arr = Array::repeat_with(|| counter.track(), 10);

    drop(arr);

    assert_eq!(counter.dropped(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let arr: Array<usize> = (0..5).collect();

    assert_eq!(
        arr,
        [0, 1, 2, 3, 4].into_iter().collect::<Array<usize>>(),
        "Different construction methods should produce equal results."
    );
    assert_ne!([0, 1, 2, 5, 4].into_iter().collect::<Array<usize>>(), arr);
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one((0_usize..5).collect::<Array<_>>()),
        "Equal arrays should produce the same hash."
    );
}

#[test]
fn test_iterators() {
    let mut arr: Array<usize> = (0..5).collect();
    let collected: Array<usize> = arr.iter().cloned().collect();
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "Array mutated by iterator should equal this slice."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = DropCounter::new();
    let arr = Array::repeat_with(|| counter.track(), 10);

    drop(arr.into_iter());
    assert_eq!(
        counter.dropped(),
        10,
        "Dropping an owned iterator should drop all elements."
    );
}
