use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{Iter, Keys, Node, NodeId, Values};
use crate::collections::contiguous::Vector;
use crate::util::fmt::{DebugRaw, indent_lines};
use crate::util::option::OptionExtension;

/// An ordered map based on a plain binary search tree, which does nothing to keep itself balanced.
///
/// Nodes are stored in an arena and link to their children and parent by index rather than by
/// pointer, so that walking upwards (as the in-order successor search does) needs neither unsafe
/// code nor reference counting. Slots freed by removals are reused by later insertions.
///
/// Inserting a key that is already present replaces its value.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the SearchTreeMap.
/// - `h`: The height of the tree, which is `log n` for random keys but `n` for sorted ones.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `get` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first/last` | `O(h)` |
pub struct SearchTreeMap<K, V> {
    pub(crate) slots: Vector<Option<Node<K, V>>>,
    pub(crate) vacant: Vector<NodeId>,
    pub(crate) root: Option<NodeId>,
    pub(crate) len: usize,
}

impl<K, V> SearchTreeMap<K, V> {
    pub fn new() -> SearchTreeMap<K, V> {
        SearchTreeMap {
            slots: Vector::new(),
            vacant: Vector::new(),
            root: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        Some(self.node(self.leftmost(self.root?)).tuple())
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        Some(self.node(self.rightmost(self.root?)).tuple())
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let id = self.leftmost(self.root?);
        Some(self.remove_node(id))
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let id = self.rightmost(self.root?);
        Some(self.remove_node(id))
    }

    /// Removes every entry, releasing the arena.
    pub fn clear(&mut self) {
        self.slots = Vector::new();
        self.vacant = Vector::new();
        self.root = None;
        self.len = 0;
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
}

impl<K: Ord, V> SearchTreeMap<K, V> {
    /// Inserts the provided entry, returning the previous value if `key` was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = None;
        let mut curr = self.root;
        let mut ordering = Ordering::Equal;

        while let Some(id) = curr {
            let node = self.node_mut(id);
            ordering = key.cmp(&node.key);
            curr = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            };
            parent = Some(id);
        }

        let id = self.alloc(Node {
            key,
            value,
            left: None,
            right: None,
            parent,
        });
        match parent {
            None => self.root = Some(id),
            Some(parent) if ordering == Ordering::Less => self.node_mut(parent).left = Some(id),
            Some(parent) => self.node_mut(parent).right = Some(id),
        }
        self.len += 1;
        None
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Some(self.node(self.find(key)?).tuple())
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find(key)?;
        Some(&mut self.node_mut(id).value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find(key)?;
        Some(self.remove_node(id))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|e| e.1)
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = self.node(id);
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }
}

impl<K, V> SearchTreeMap<K, V> {
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.slots[id.0].as_ref().unreachable()
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.slots[id.0].as_mut().unreachable()
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }

    /// Finds the node that follows `id` in key order: the leftmost node of its right subtree, or
    /// otherwise the first ancestor reached from a left child.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.node(id).right {
            return Some(self.leftmost(right));
        }

        let mut child = id;
        let mut parent = self.node(id).parent;
        while let Some(id) = parent {
            let node = self.node(id);
            if node.left == Some(child) {
                break;
            }
            child = id;
            parent = node.parent;
        }
        parent
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.vacant.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            },
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            },
        }
    }

    /// Replaces the subtree rooted at `old` with the one rooted at `new`, as seen from `old`'s
    /// parent. `old` keeps its own links.
    fn transplant(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.node(old).parent;
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            },
        }
        if let Some(new) = new {
            self.node_mut(new).parent = parent;
        }
    }

    pub(crate) fn remove_node(&mut self, id: NodeId) -> (K, V) {
        let Node { left, right, .. } = *self.node(id);

        match (left, right) {
            (None, _) => self.transplant(id, right),
            (_, None) => self.transplant(id, left),
            (Some(left), Some(right)) => {
                // The successor has no left child, so it can be spliced out and take id's place.
                let successor = self.leftmost(right);
                if self.node(successor).parent != Some(id) {
                    let successor_right = self.node(successor).right;
                    self.transplant(successor, successor_right);
                    self.node_mut(successor).right = Some(right);
                    self.node_mut(right).parent = Some(successor);
                }
                self.transplant(id, Some(successor));
                self.node_mut(successor).left = Some(left);
                self.node_mut(left).parent = Some(successor);
            },
        }

        let node = self.slots[id.0].take().unreachable();
        self.vacant.push(id);
        self.len -= 1;
        (node.key, node.value)
    }

    /// Checks the ordering and every parent link, returning the number of nodes reachable from the
    /// root.
    #[cfg(test)]
    pub(crate) fn verify(&self) -> usize
    where
        K: Ord + Debug,
    {
        let mut count = 0;
        let mut prev: Option<&K> = None;
        let mut curr = self.root.map(|root| self.leftmost(root));
        if let Some(root) = self.root {
            assert_eq!(self.node(root).parent, None, "The root shouldn't have a parent.");
        }

        while let Some(id) = curr {
            let node = self.node(id);
            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(self.node(child).parent, Some(id), "Broken parent link below {:?}.", node.key);
            }
            assert!(prev.is_none_or(|p| p < &node.key), "{:?} is out of order.", node.key);
            prev = Some(&node.key);
            count += 1;
            curr = self.successor(id);
        }

        assert_eq!(count, self.len);
        assert_eq!(self.slots.len(), self.len + self.vacant.len(), "Every slot is live or vacant.");
        count
    }

    fn draw(&self, id: Option<NodeId>) -> String
    where
        K: Debug,
        V: Debug,
    {
        match id {
            Some(id) => {
                let node = self.node(id);
                format!(
                    "{}\n({:?}: {:?})\n{}",
                    indent_lines("┌    ", &self.draw(node.left)),
                    node.key,
                    node.value,
                    indent_lines("└    ", &self.draw(node.right)),
                )
            },
            None => String::from("-"),
        }
    }
}

impl<K, V> Default for SearchTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for SearchTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SearchTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = SearchTreeMap::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Debug, V: Debug> Debug for SearchTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchTreeMap")
            .field("nodes", &DebugRaw(format!("\n{}\n", self.draw(self.root))))
            .field("len", &self.len)
            .field("vacant", &self.vacant.len())
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for SearchTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
