use std::cmp::Ordering;

/// A total ordering over `T` that can be supplied to an ordered collection at runtime, rather than
/// relying on `T`'s own [`Ord`] implementation.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a Comparator, so most orderings can be written inline:
/// ```
/// # use classic_collections::collections::heap::PriorityQueue;
/// let mut queue = PriorityQueue::with_comparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
/// queue.extend([-3, 1, -2]);
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(-2));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`, with [`Ordering::Less`] meaning that `a` comes first.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Orders items by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders items in the reverse of their [`Ord`] implementation, turning a min-heap into a
/// max-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reverse;

impl<T: Ord + ?Sized> Comparator<T> for Reverse {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
