use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Link, Node, NodePtr};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// Besides being a general purpose list, this is the collision chain used by each bucket of
/// [`HashMap`](crate::collections::hash::HashMap), which relies on `push_back`, the predicate
/// based lookups ([`find_by`](LinkedList::find_by), [`find_mut_by`](LinkedList::find_mut_by)) and
/// removal by linear scan ([`remove_first_by`](LinkedList::remove_first_by)).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `remove_first_by` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, (or more
/// importantly, favours contiguous collections) because all `O(i)` or `O(n)` operations will
/// consist primarily of cache misses. For this reason,
/// [`Vector`](crate::collections::contiguous::Vector) should be preferred for most applications.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(NodePtr::value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(NodePtr::value_mut)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(NodePtr::value)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(NodePtr::value_mut)
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => head.set_prev(Some(node)),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => tail.set_next(Some(node)),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| self.unlink(head))
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|tail| self.unlink(tail))
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting all following elements back.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] if `index` is greater
    /// than the length rather than panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            // For this branch, the element currently at index has a predecessor.
            let next = self.checked_seek(index)?;
            let prev = next.prev().ok_or(self.out_of_bounds(index))?;

            let node = NodePtr::from_node(Node {
                value,
                prev: Some(prev),
                next: Some(next),
            });

            prev.set_next(Some(node));
            next.set_prev(Some(node));
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] rather than panicking if
    /// the index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.unlink(node))
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning the old value or an [`Err`] if
    /// the index is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(
            self.checked_seek(index)?.value_mut(),
            new_value,
        ))
    }

    /// Moves every element of `other` onto the end of self.
    pub fn append(&mut self, mut other: LinkedList<T>) {
        // Take the links out of other so that dropping it doesn't free the moved nodes.
        let (Some(other_head), Some(other_tail)) = (other.head.take(), other.tail.take()) else {
            return;
        };
        let other_len = mem::take(&mut other.len);

        match self.tail {
            Some(tail) => {
                tail.set_next(Some(other_head));
                other_head.set_prev(Some(tail));
            },
            None => self.head = Some(other_head),
        }
        self.tail = Some(other_tail);
        self.len += other_len;
    }

    /// Removes the first element for which `predicate` returns true, scanning from the front.
    pub fn remove_first_by<F: FnMut(&T) -> bool>(&mut self, mut predicate: F) -> Option<T> {
        let mut curr = self.head;
        while let Some(node) = curr {
            if predicate(node.value()) {
                return Some(self.unlink(node));
            }
            curr = node.next();
        }
        None
    }

    /// Returns a reference to the first element for which `predicate` returns true.
    pub fn find_by<F: FnMut(&T) -> bool>(&self, mut predicate: F) -> Option<&T> {
        self.iter().find(|i| predicate(i))
    }

    /// Returns a mutable reference to the first element for which `predicate` returns true.
    pub fn find_mut_by<F: FnMut(&T) -> bool>(&mut self, mut predicate: F) -> Option<&mut T> {
        self.iter_mut().find(|i| predicate(i))
    }

    /// Drops every element in the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|i| i == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }

    /// Removes the first element equal to `item`, returning it if one was found.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        self.remove_first_by(|i| i == item)
    }
}

impl<T> LinkedList<T> {
    /// Detaches `node` from the list, frees it and returns its value.
    pub(crate) fn unlink(&mut self, node: NodePtr<T>) -> T {
        // SAFETY: Every NodePtr handed to this method is linked into self, so it is allocated, and
        // it is unreachable from the list once this method returns.
        let Node { value, prev, next } = unsafe { node.take_node() };

        match prev {
            Some(prev) => prev.set_next(next),
            None => self.head = next,
        }
        match next {
            Some(next) => next.set_prev(prev),
            None => self.tail = prev,
        }

        self.len -= 1;
        value
    }

    /// Finds the node at `index`, walking from whichever end of the list is closer.
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }

        let seek = if index < self.len / 2 {
            Self::seek_fwd(index, self.head)
        } else {
            Self::seek_bwd(self.len - 1 - index, self.tail)
        };
        seek.ok_or(self.out_of_bounds(index))
    }

    pub(crate) fn seek_fwd(count: usize, start: Link<T>) -> Link<T> {
        let mut node = start?;
        for _ in 0..count {
            node = node.next()?;
        }
        Some(node)
    }

    pub(crate) fn seek_bwd(count: usize, start: Link<T>) -> Link<T> {
        let mut node = start?;
        for _ in 0..count {
            node = node.prev()?;
        }
        Some(node)
    }

    pub(crate) const fn out_of_bounds(&self, index: usize) -> IndexOutOfBounds {
        IndexOutOfBounds { index, len: self.len }
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            assert!(node.prev() == prev, "Backward link doesn't match the previous node.");
            count += 1;
            prev = Some(node);
            curr = node.next();
        }
        assert!(self.tail == prev, "The tail should be the last node reached.");
        assert_eq!(count, self.len, "The number of linked nodes should equal len.");
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

// SAFETY: The list owns its nodes exclusively, so sending it sends every T along with it.
unsafe impl<T: Send> Send for LinkedList<T> {}

// SAFETY: Shared access to the list only ever produces shared references to T.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, ")")
    }
}
