use std::hash::{BuildHasher, Hash};
use std::iter::{Flatten, FusedIterator};
use std::slice::{Iter as ArrIter, IterMut as ArrIterMut};

use super::{Bucket, Entry, HashMap};
use crate::collections::contiguous::array::IntoIter as ArrIntoIter;

// Every iterator here walks the buckets in order, and within each bucket walks its chain from the
// front. Flattening twice skips the empty buckets and then steps through each chain.

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for HashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.arr.into_iter().flatten().flatten(),
        }
    }
}

pub struct IntoIter<K, V> {
    pub(crate) inner: Flatten<Flatten<ArrIntoIter<Bucket<K, V>>>>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        self.len -= 1;
        Some(entry.into_tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a HashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            inner: self.arr.iter().flatten().flatten(),
        }
    }
}

pub struct Iter<'a, K, V> {
    pub(crate) inner: Flatten<Flatten<ArrIter<'a, Bucket<K, V>>>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry: &'a Entry<K, V> = self.inner.next()?;
        self.len -= 1;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}

pub struct IntoKeys<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct IntoValues<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct ValuesMut<'a, K, V> {
    pub(crate) inner: Flatten<Flatten<ArrIterMut<'a, Bucket<K, V>>>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        let entry: &'a mut Entry<K, V> = self.inner.next()?;
        self.len -= 1;
        Some(&mut entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
