use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use super::{Branch, DrawBranch, InOrderCursor, Iter, Keys, Values};
use crate::util::fmt::DebugRaw;

static GENERATION: AtomicU64 = AtomicU64::new(0);

/// Produces a stamp that no tree has carried before.
pub(crate) fn next_generation() -> u64 {
    GENERATION.fetch_add(1, AtomicOrdering::Relaxed)
}

/// An ordered map based on an AVL tree, which keeps the heights of every node's subtrees within
/// one of each other so that lookups are always logarithmic.
///
/// Unlike [`HashMap`](crate::collections::hash::HashMap), inserting a key that is already present
/// keeps the existing entry: the first value written for a key wins.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the AvlTreeMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(log n)` |
/// | `get` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `contains` | `O(log n)` |
/// | `first/last` | `O(log n)` |
pub struct AvlTreeMap<K, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
    /// Replaced whenever nodes are added or removed, which lets an [`InOrderCursor`] detect that
    /// the path it saved has been invalidated.
    pub(crate) generation: u64,
}

impl<K, V> AvlTreeMap<K, V> {
    pub fn new() -> AvlTreeMap<K, V> {
        AvlTreeMap {
            root: None,
            len: 0,
            generation: next_generation(),
        }
    }

    /// Returns the number of entries in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the tree, where a tree with a single entry has height 0, or None if
    /// the tree is empty.
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(|node| node.height.unsigned_abs())
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node.tuple())
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.tuple())
    }

    /// Removes every entry from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.generation = next_generation();
    }

    /// Returns an iterator over all entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Creates a cursor over the tree's entries that doesn't borrow the tree. Each step is handed
    /// the tree and fails if the tree has been structurally modified since the cursor was created.
    ///
    /// ```
    /// # use classic_collections::collections::binary_tree::AvlTreeMap;
    /// let mut tree: AvlTreeMap<u8, char> = [(2, 'b'), (1, 'a')].into_iter().collect();
    /// let mut cursor = tree.cursor();
    /// assert_eq!(cursor.next(&tree), Ok(Some((&1, &'a'))));
    ///
    /// tree.put(3, 'c');
    /// assert!(cursor.next(&tree).is_err());
    /// ```
    pub fn cursor(&self) -> InOrderCursor<K, V> {
        InOrderCursor::new(self)
    }
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Inserts the provided entry if `key` isn't already present, returning true if it was
    /// inserted. If the key is present, both the existing entry and the tree are left untouched.
    ///
    /// ```
    /// # use classic_collections::collections::binary_tree::AvlTreeMap;
    /// let mut tree = AvlTreeMap::new();
    /// assert!(tree.put(5, "a"));
    /// assert!(!tree.put(5, "b"));
    /// assert_eq!(tree.get(&5), Some(&"a"));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> bool {
        let inserted = super::put(&mut self.root, key, value);
        if inserted {
            self.len += 1;
            self.generation = next_generation();
        }
        inserted
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node.tuple()),
            };
        }
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    /// Returns a mutable reference to the value for `key`. Changing a value isn't a structural
    /// modification, so it doesn't invalidate cursors.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root.as_deref_mut();
        while let Some(node) = curr {
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = super::remove_entry(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
            self.generation = next_generation();
        }
        removed
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|e| e.1)
    }
}

impl<K, V> AvlTreeMap<K, V> {
    /// Checks every structural invariant of the tree, returning the number of nodes visited.
    #[cfg(test)]
    pub(crate) fn verify(&self) -> usize
    where
        K: Ord + Debug,
    {
        fn visit<K: Ord + Debug, V>(
            branch: &Branch<K, V>,
            lower: Option<&K>,
            upper: Option<&K>,
        ) -> (isize, usize) {
            let Some(node) = branch else {
                return (-1, 0);
            };
            assert!(lower.is_none_or(|l| l < &node.key), "{:?} is out of order.", node.key);
            assert!(upper.is_none_or(|u| &node.key < u), "{:?} is out of order.", node.key);

            let (left_height, left_count) = visit(&node.left, lower, Some(&node.key));
            let (right_height, right_count) = visit(&node.right, Some(&node.key), upper);
            assert_eq!(node.height, 1 + left_height.max(right_height), "Stale height at {:?}.", node.key);
            assert!(
                (left_height - right_height).abs() <= 1,
                "{:?} is unbalanced.",
                node.key
            );
            (node.height, left_count + right_count + 1)
        }

        let (_, count) = visit(&self.root, None, None);
        assert_eq!(count, self.len, "len should equal the number of nodes.");
        count
    }
}

impl<K, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for AvlTreeMap<K, V> {
    fn clone(&self) -> Self {
        AvlTreeMap {
            root: super::clone_branch(&self.root),
            len: self.len,
            generation: next_generation(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AvlTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for AvlTreeMap<K, V> {}

impl<K: Ord, V> Extend<(K, V)> for AvlTreeMap<K, V> {
    /// Puts each entry, so the first occurrence of a key is the one kept.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = AvlTreeMap::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Debug, V: Debug> Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTreeMap")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", DrawBranch(&self.root))))
            .field("len", &self.len)
            .field("height", &self.height())
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

