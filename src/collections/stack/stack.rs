use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::LinkedList;
use crate::collections::linked::list::{IntoIter, Iter};
#[doc(inline)]
pub use crate::util::error::EmptyCollection;

/// A last-in first-out collection. The top of the Stack is the front of the underlying
/// [`LinkedList`], so every operation on the top is `O(1)`.
///
/// Unlike most collections here, reading or removing from an empty Stack returns an
/// [`EmptyCollection`] error rather than [`None`], as an empty Stack is usually a logic error in
/// the calling code.
pub struct Stack<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack { list: LinkedList::new() }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Places `value` on top of the Stack.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the top of the Stack.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.list.pop_front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the top of the Stack without removing it.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.list.front().ok_or(EmptyCollection)
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.list.front_mut().ok_or(EmptyCollection)
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from the top of the Stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Returns the 1-based distance of the topmost element equal to `item` from the top of the
    /// Stack, so the top itself is at distance 1.
    /// ```
    /// # use classic_collections::collections::stack::Stack;
    /// let stack: Stack<char> = "abc".chars().collect();
    /// assert_eq!(stack.search(&'c'), Some(1));
    /// assert_eq!(stack.search(&'a'), Some(3));
    /// assert_eq!(stack.search(&'z'), None);
    /// ```
    pub fn search(&self, item: &T) -> Option<usize> {
        self.list.index_of(item).map(|i| i + 1)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Consumes the Stack, popping from top to bottom.
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack { list: self.list.clone() }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.list.front())
            .field("len", &self.len())
            .finish()
    }
}
