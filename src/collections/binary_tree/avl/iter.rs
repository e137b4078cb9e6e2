use std::iter::FusedIterator;

use super::{AvlTreeMap, Branch, Node};
use crate::collections::contiguous::Vector;

impl<K, V> IntoIterator for AvlTreeMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vector::new(),
            len: self.len,
        };
        iter.push_left_spine(self.root.take());
        iter
    }
}

/// An owned iterator over the entries of an [`AvlTreeMap`] in ascending key order. Nodes are
/// detached from the tree as the traversal reaches them.
pub struct IntoIter<K, V> {
    pub(crate) stack: Vector<Box<Node<K, V>>>,
    pub(crate) len: usize,
}

impl<K, V> IntoIter<K, V> {
    fn push_left_spine(&mut self, mut branch: Branch<K, V>) {
        while let Some(mut node) = branch {
            branch = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.len -= 1;
        Some(node.into_tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<'a, K, V> IntoIterator for &'a AvlTreeMap<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vector::new(),
            len: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

/// A borrowed iterator over the entries of an [`AvlTreeMap`] in ascending key order.
///
/// The stack holds the nodes whose left subtree is being (or has been) visited but which haven't
/// been yielded yet, so it never grows beyond the height of the tree.
pub struct Iter<'a, K, V> {
    pub(crate) stack: Vector<&'a Node<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut curr: Option<&'a Node<K, V>>) {
        while let Some(node) = curr {
            self.stack.push(node);
            curr = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.len -= 1;
        Some(node.tuple())
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
            stack: self.stack.clone(),
            len: self.len,
        }
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

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

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

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
