use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

/// Owned iterator over the items of an [`Array`].
pub type IntoIter<T> = std::vec::IntoIter<T>;

/// A fixed size, heap allocated buffer whose size is chosen at runtime. It is the storage layer
/// for [`Vector`](super::super::Vector) and the bucket table of
/// [`HashMap`](crate::collections::hash::HashMap).
///
/// The size of an Array only changes through [`Array::realloc_with`], which always produces a
/// fresh allocation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc_with` | `O(n)` |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    pub(crate) inner: Box<[T]>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// ```
    pub fn new() -> Array<T> {
        Array {
            inner: Box::default(),
        }
    }

    /// Creates a new Array of the provided `size`, calling `f` to produce each item.
    pub fn repeat_with<F: FnMut() -> T>(mut f: F, size: usize) -> Array<T> {
        Array {
            inner: (0..size).map(|_| f()).collect(),
        }
    }

    /// Returns the size of the Array.
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    /// Replaces the Array's buffer with one of `new_size`. Existing items keep their positions,
    /// items beyond the new size are dropped and new positions are filled by calling `f`.
    pub fn realloc_with<F: FnMut() -> T>(&mut self, f: F, new_size: usize) {
        let mut items = mem::take(&mut self.inner).into_vec();
        items.resize_with(new_size, f);
        self.inner = items.into_boxed_slice();
    }
}

impl<T: Default> Array<T> {
    /// Creates a new Array of the provided `size`, filled with the default value of `T`.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Array;
    /// let arr: Array<Option<u8>> = Array::repeat_default(3);
    /// assert_eq!(&*arr, &[None, None, None]);
    /// ```
    pub fn repeat_default(size: usize) -> Array<T> {
        Array::repeat_with(T::default, size)
    }

    /// Reallocates the Array to `new_size`, filling any new positions with the default value.
    pub fn realloc_with_default(&mut self, new_size: usize) {
        self.realloc_with(T::default, new_size)
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for Array<T> {
    fn from(value: Box<[T]>) -> Self {
        Array {
            inner: value,
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_vec().into_iter()
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
