use std::fmt::{self, Debug, Formatter};

use super::IntoIter;
use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::Iter;
use crate::collections::traits::{Comparator, Natural};
use crate::util::fmt::DebugIter;

/// The capacity a PriorityQueue is created with when none is provided.
pub const DEFAULT_CAP: usize = 11;

/// A queue that always hands out its smallest item first, as decided by its [`Comparator`].
///
/// Items are kept in a binary min-heap laid out in a [`Vector`]: the children of the item at `i`
/// are at `2i + 1` and `2i + 2`, and no item is ordered before its parent. Using
/// [`Reverse`](crate::collections::traits::Reverse) as the comparator turns this into a max-heap.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the PriorityQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `push` | `O(log n)`* |
/// | `pop` | `O(log n)` |
/// | `contains` | `O(n)` |
/// | `remove_item` | `O(n)` |
///
/// \* Plus the cost of growing the underlying Vector when it is full.
pub struct PriorityQueue<T, C: Comparator<T> = Natural> {
    pub(crate) heap: Vector<T>,
    pub(crate) comparator: C,
}

impl<T: Ord> PriorityQueue<T, Natural> {
    /// Creates an empty PriorityQueue ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> PriorityQueue<T, Natural> {
        Self::with_cap_and_comparator(DEFAULT_CAP, Natural)
    }

    pub fn with_cap(cap: usize) -> PriorityQueue<T, Natural> {
        Self::with_cap_and_comparator(cap, Natural)
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    pub fn with_comparator(comparator: C) -> PriorityQueue<T, C> {
        Self::with_cap_and_comparator(DEFAULT_CAP, comparator)
    }

    pub fn with_cap_and_comparator(cap: usize, comparator: C) -> PriorityQueue<T, C> {
        PriorityQueue {
            heap: Vector::with_cap(cap),
            comparator,
        }
    }

    pub const fn len(&self) -> usize {
        self.heap.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Adds `value` to the queue.
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the first item in the queue.
    ///
    /// ```
    /// # use classic_collections::collections::heap::PriorityQueue;
    /// let mut queue: PriorityQueue<u8> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.pop(), Some(2));
    /// assert_eq!(queue.pop(), Some(3));
    /// assert_eq!(queue.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Returns the first item in the queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.try_get(0).ok()
    }

    /// Drops every item, keeping the current capacity.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates over the items in heap order, which is only partially sorted.
    pub fn iter(&self) -> Iter<'_, T> {
        self.heap.iter()
    }

    /// Consumes the queue, returning its items sorted from first to last.
    pub fn into_sorted_vector(self) -> Vector<T> {
        self.into_iter().collect()
    }

    /// Removes the item at `index` by moving the last item into its place and restoring the heap
    /// around it.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<T> {
        let last = self.heap.len().checked_sub(1)?;
        if index > last {
            return None;
        }

        self.heap.swap(index, last);
        let removed = self.heap.pop();
        if index < self.heap.len() && self.sift_down(index) == index {
            // The moved item might belong above its new position instead.
            self.sift_up(index);
        }
        removed
    }

    /// Moves the item at `index` up until its parent doesn't come after it, returning its final
    /// position.
    pub(crate) fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.comparator.lt(&self.heap[index], &self.heap[parent]) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
        index
    }

    /// Moves the item at `index` down until neither child comes before it, returning its final
    /// position.
    pub(crate) fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.comparator.lt(&self.heap[right], &self.heap[left]) {
                right
            } else {
                left
            };

            if !self.comparator.lt(&self.heap[child], &self.heap[index]) {
                break;
            }
            self.heap.swap(index, child);
            index = child;
        }
        index
    }

    #[cfg(test)]
    pub(crate) fn verify(&self) {
        for index in 1..self.heap.len() {
            let parent = (index - 1) / 2;
            assert!(
                !self.comparator.lt(&self.heap[index], &self.heap[parent]),
                "Item at {index} comes before its parent."
            );
        }
    }
}

impl<T: PartialEq, C: Comparator<T>> PriorityQueue<T, C> {
    pub fn contains(&self, item: &T) -> bool {
        self.heap.contains(item)
    }

    /// Removes a single item equal to `item`, returning it if one was found.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let index = self.heap.index_of(item)?;
        self.remove_at(index)
    }
}

impl<T: Ord> Default for PriorityQueue<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Clone for PriorityQueue<T, C> {
    fn clone(&self) -> Self {
        PriorityQueue {
            heap: self.heap.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T: Debug, C: Comparator<T>> Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &DebugIter(self.heap.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T, C: Comparator<T>> IntoIterator for PriorityQueue<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T, C>;

    /// Consumes the queue, yielding its items in priority order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
