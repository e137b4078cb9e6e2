use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut};
use crate::collections::contiguous::Array;
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Every slot of the underlying Array below `len` holds a value and every slot at or above it is
/// empty. The capacity only ever grows: it doubles whenever a push or insert finds the Vector
/// full, and nothing (not even [`clear`](Vector::clear)) gives memory back.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<Option<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::repeat_with(|| None, cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector.
    pub fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(vec.to_string(), "[0, 1, 2, 3, 4, 5]");
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len] = Some(value);
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            self.arr[self.len].take()
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Vector.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let err = self.out_of_bounds(index);
        // Slots at or above len are always empty.
        self.arr.get(index).and_then(Option::as_ref).ok_or(err)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Vector.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let err = self.out_of_bounds(index);
        self.arr.get_mut(index).and_then(Option::as_mut).ok_or(err)
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// vec.insert(6, 400);
    /// assert_eq!(vec.to_string(), "[0, 200, 100, 300, 1, 2, 400]");
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] if `index` is greater
    /// than the length rather than panicking. The Vector is left untouched on failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        let mut prev = Some(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.arr[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, returning an [`Err`] rather than panicking if
    /// the index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let mut next = None;
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        next.ok_or(self.out_of_bounds(index))
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value or an
    /// [`Err`] if the index is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let err = self.out_of_bounds(index);
        mem::replace(&mut self.arr[index], Some(new_value)).ok_or(err)
    }

    /// Swaps the elements at indices `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.try_swap(a, b).throw()
    }

    /// Swaps the elements at indices `a` and `b`, returning an [`Err`] if either index is out of
    /// bounds.
    pub fn try_swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfBounds> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.arr.swap(a, b);
        Ok(())
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len + extra;

        if new_cap <= self.cap() { return; }

        self.arr.realloc_with(|| None, new_cap);
    }

    /// Drops every element, leaving the capacity untouched.
    pub fn clear(&mut self) {
        for slot in self.arr[..self.len].iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over references to the elements of the Vector.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements of the Vector.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> Vector<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|i| i == item)
    }

    /// Returns true if the Vector contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes and returns the first element equal to `item`, shifting all following elements.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        self.try_remove(index).ok()
    }
}

impl<T> Vector<T> {
    /// Grows the Vector by the growth factor, ensuring that it can hold additional elements.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);

        self.arr.realloc_with(|| None, new_cap);
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(self.out_of_bounds(index))
        }
    }

    pub(crate) const fn out_of_bounds(&self, index: usize) -> IndexOutOfBounds {
        IndexOutOfBounds { index, len: self.len }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap(self.cap());
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
