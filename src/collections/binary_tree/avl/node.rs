use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::util::fmt::indent_lines;

/// An optional, exclusively owned subtree.
pub(crate) type Branch<K, V> = Option<Box<Node<K, V>>>;

pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    /// The number of edges on the longest path down to a leaf, so 0 for a leaf.
    pub height: isize,
}

/// The height of a subtree, where an absent subtree has height -1.
pub(crate) fn height<K, V>(branch: &Branch<K, V>) -> isize {
    branch.as_ref().map_or(-1, |node| node.height)
}

impl<K, V> Node<K, V> {
    pub fn leaf(key: K, value: V) -> Box<Node<K, V>> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    pub fn update_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }

    /// Positive when the left subtree is taller.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) - height(&self.right)
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

/// Lifts the right child of `node` into its place.
pub(crate) fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Lifts the left child of `node` into its place.
pub(crate) fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Recomputes the height of `node` and applies the single or double rotation needed to bring its
/// balance factor back within `[-1, 1]`, returning the new root of the subtree.
pub(crate) fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance < -1 {
        if let Some(right) = node.right.take() {
            node.right = Some(if right.balance_factor() > 0 {
                rotate_right(right)
            } else {
                right
            });
        }
        rotate_left(node)
    } else if balance > 1 {
        if let Some(left) = node.left.take() {
            node.left = Some(if left.balance_factor() < 0 {
                rotate_left(left)
            } else {
                left
            });
        }
        rotate_right(node)
    } else {
        node
    }
}

fn rebalance_branch<K, V>(branch: &mut Branch<K, V>) {
    if let Some(node) = branch.take() {
        *branch = Some(rebalance(node));
    }
}

/// Inserts the entry below `branch` unless an equal key is already present, rebalancing every
/// node on the way back up. Returns true if a node was created.
pub(crate) fn put<K: Ord, V>(branch: &mut Branch<K, V>, key: K, value: V) -> bool {
    let Some(node) = branch else {
        *branch = Some(Node::leaf(key, value));
        return true;
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => put(&mut node.left, key, value),
        Ordering::Greater => put(&mut node.right, key, value),
        // The first value written for a key is kept.
        Ordering::Equal => false,
    };

    if inserted {
        rebalance_branch(branch);
    }
    inserted
}

/// Removes the entry for `key` from below `branch`, rebalancing every node on the way back up.
pub(crate) fn remove_entry<K, V, Q>(branch: &mut Branch<K, V>, key: &Q) -> Option<(K, V)>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = branch.as_mut()?;

    let removed = match key.cmp(node.key.borrow()) {
        Ordering::Less => remove_entry(&mut node.left, key),
        Ordering::Greater => remove_entry(&mut node.right, key),
        Ordering::Equal => {
            let mut node = branch.take()?;
            match (node.left.take(), node.right.take()) {
                (None, None) => {},
                (Some(child), None) | (None, Some(child)) => *branch = Some(child),
                (Some(left), Some(right)) => {
                    // Take over the in-order successor's entry, which is removed from the right.
                    let mut right = Some(right);
                    if let Some((key, value)) = take_first(&mut right) {
                        let removed = (
                            mem::replace(&mut node.key, key),
                            mem::replace(&mut node.value, value),
                        );
                        node.left = Some(left);
                        node.right = right;
                        *branch = Some(rebalance(node));
                        return Some(removed);
                    }
                },
            }
            return Some(node.into_tuple());
        },
    };

    if removed.is_some() {
        rebalance_branch(branch);
    }
    removed
}

/// Removes the leftmost entry below `branch`, rebalancing on the way back up.
pub(crate) fn take_first<K, V>(branch: &mut Branch<K, V>) -> Option<(K, V)> {
    let node = branch.as_mut()?;

    if node.left.is_some() {
        let first = take_first(&mut node.left);
        rebalance_branch(branch);
        first
    } else {
        let mut node = branch.take()?;
        *branch = node.right.take();
        Some(node.into_tuple())
    }
}

pub(crate) fn clone_branch<K: Clone, V: Clone>(branch: &Branch<K, V>) -> Branch<K, V> {
    branch.as_ref().map(|node| {
        Box::new(Node {
            key: node.key.clone(),
            value: node.value.clone(),
            left: clone_branch(&node.left),
            right: clone_branch(&node.right),
            height: node.height,
        })
    })
}

/// Draws a subtree sideways, with the left subtree above its parent and the right below.
pub(crate) struct DrawBranch<'a, K, V>(pub &'a Branch<K, V>);

impl<K: Debug, V: Debug> Debug for DrawBranch<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}: {:?})\n{}",
                indent_lines("┌    ", &format!("{:?}", DrawBranch(&node.left))),
                node.key,
                node.value,
                indent_lines("└    ", &format!("{:?}", DrawBranch(&node.right))),
            ),
            None => write!(f, "-"),
        }
    }
}
