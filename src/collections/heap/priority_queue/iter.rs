use std::iter::FusedIterator;

use super::PriorityQueue;
use crate::collections::traits::Comparator;

/// An owned iterator that pops every item from a [`PriorityQueue`], so items come out in priority
/// order.
pub struct IntoIter<T, C: Comparator<T>>(pub(crate) PriorityQueue<T, C>);

impl<T, C: Comparator<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T, C: Comparator<T>> FusedIterator for IntoIter<T, C> {}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;

    type IntoIter = crate::collections::contiguous::vector::Iter<'a, T>;

    /// Iterates in heap order.
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
