use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{Iter, IterMut};
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A singly linked list where each node owns the next.
///
/// Only the front of the list is directly accessible, making it a good fit for stack-like usage
/// and a poor one for anything else.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push_front/pop_front` | `O(1)` |
/// | `get/insert/remove` | `O(i)` |
/// | `contains` | `O(n)` |
/// | `reverse` | `O(n)` |
pub struct ForwardList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> ForwardList<T> {
    pub const fn new() -> ForwardList<T> {
        ForwardList { head: None, len: 0 }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let Node { value, next } = *self.head.take()?;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.iter().nth(index).ok_or(self.out_of_bounds(index))
    }

    /// Inserts `value` at `index`, which may be equal to the length of the list.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let err = self.out_of_bounds(index);
        if index > self.len {
            return Err(err);
        }

        let slot = self.link_at(index).ok_or(err)?;
        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let err = self.out_of_bounds(index);
        if index >= self.len {
            return Err(err);
        }

        let slot = self.link_at(index).ok_or(err)?;
        let Node { value, next } = *slot.take().ok_or(err)?;
        *slot = next;
        self.len -= 1;
        Ok(value)
    }

    /// Reverses the order of the list in place, without reallocating any nodes.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = mem::replace(&mut node.next, reversed);
            reversed = Some(node);
        }
        self.head = reversed;
    }

    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns the link that holds the node at `index`, which is the tail's `next` when `index`
    /// equals the length.
    fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            slot = &mut slot.as_mut()?.next;
        }
        Some(slot)
    }

    const fn out_of_bounds(&self, index: usize) -> IndexOutOfBounds {
        IndexOutOfBounds { index, len: self.len }
    }
}

impl<T: PartialEq> ForwardList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|i| i == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        // The default drop would recurse once per node.
        self.clear();
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    /// Collects the items so that the list iterates in the same order as `iter`.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        for item in iter {
            list.push_front(item);
        }
        list.reverse();
        list
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            write!(f, "({item:?}) -> ")?;
        }
        write!(f, "None")
    }
}
