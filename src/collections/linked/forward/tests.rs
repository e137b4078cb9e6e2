#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_front_operations() {
    let mut list = ForwardList::new();
    list.push_front('c');
    list.push_front('b');
    list.push_front('a');
    assert_eq!(list.to_string(), "('a') -> ('b') -> ('c') -> None");

    *list.front_mut().unwrap() = 'z';
    assert_eq!(list.front(), Some(&'z'));
    assert_eq!(list.pop_front(), Some('z'));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_positional_operations() {
    let mut list: ForwardList<u32> = (0..4).collect();
    assert_eq!(list.to_string(), "(0) -> (1) -> (2) -> (3) -> None");

    list.insert(0, 10);
    list.insert(5, 20);
    list.insert(2, 30);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 0, 30, 1, 2, 3, 20]);
    assert_eq!(*list.get(6), 20);

    assert_eq!(list.remove(6), 20);
    assert_eq!(list.remove(0), 10);
    assert_eq!(list.remove(1), 30);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
    assert_eq!(list.index_of(&2), Some(2));
    assert!(!list.contains(&30));

    assert_eq!(list.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(list.try_insert(5, 0), Err(IndexOutOfBounds { index: 5, len: 4 }));
    assert_eq!(list.try_remove(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_panics!({ list.remove(9); }, contains "Index 9 out of bounds");
    assert_eq!(list.len(), 4);
}

#[test]
fn test_reverse() {
    let mut list: ForwardList<u8> = (1..=5).collect();
    list.reverse();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
    assert_eq!(list.len(), 5);

    let mut empty: ForwardList<u8> = ForwardList::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_iter_mut_and_equality() {
    let mut list: ForwardList<i64> = (0..3).collect();
    for i in list.iter_mut() {
        *i = -*i;
    }
    assert_eq!(list, [0, -1, -2].into_iter().collect::<ForwardList<i64>>());
    assert_eq!(list.clone().into_iter().sum::<i64>(), -3);
    assert_eq!(list.iter().len(), 3);
}

#[test]
fn test_long_list_drop() {
    let list: ForwardList<usize> = (0..200_000).collect();
    assert_eq!(list.len(), 200_000);
    drop(list);

    let counter = DropCounter::new();
    let mut list: ForwardList<_> = (0..6).map(|_| counter.track()).collect();
    drop(list.remove(3));
    assert_eq!(counter.dropped(), 1);
    drop(list);
    assert_eq!(counter.dropped(), 6);
}
