use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{AvlTreeMap, Node};
use crate::collections::contiguous::Vector;
#[doc(inline)]
pub use crate::util::error::ConcurrentModification;

/// An in-order traversal of an [`AvlTreeMap`] that doesn't hold a borrow of the tree between
/// steps, allowing the tree to be mutated while the cursor is alive.
///
/// The cursor records the tree's generation when it is created. Any structural modification
/// (an insertion, a successful removal or a clear) gives the tree a new generation, after which
/// every call to [`next`](InOrderCursor::next) fails with [`ConcurrentModification`] until the
/// cursor is [`restart`](InOrderCursor::restart)ed. Changing values through
/// [`get_mut`](AvlTreeMap::get_mut) or attempting to put a duplicate key isn't structural, so the
/// cursor carries on.
///
/// Rather than holding on to nodes, the cursor remembers the left and right steps leading from
/// the root to the last entry it returned, and walks them again on every call. Each step therefore
/// costs `O(log n)`.
pub struct InOrderCursor<K, V> {
    pub(crate) path: Vector<Step>,
    pub(crate) state: State,
    pub(crate) generation: u64,
    pub(crate) _phantom: PhantomData<fn() -> (K, V)>,
}

/// A single step down from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Nothing has been returned yet.
    Start,
    /// `path` leads to the entry returned last.
    At,
    Done,
}

impl<K, V> InOrderCursor<K, V> {
    pub(crate) fn new(tree: &AvlTreeMap<K, V>) -> InOrderCursor<K, V> {
        InOrderCursor {
            path: Vector::new(),
            state: State::Start,
            generation: tree.generation,
            _phantom: PhantomData,
        }
    }

    /// Returns the next entry of `tree` in ascending key order, or None once every entry has been
    /// visited.
    ///
    /// # Errors
    /// Returns [`ConcurrentModification`] if `tree` isn't the tree this cursor was started on, or
    /// if it has been structurally modified since.
    pub fn next<'a>(
        &mut self,
        tree: &'a AvlTreeMap<K, V>,
    ) -> Result<Option<(&'a K, &'a V)>, ConcurrentModification> {
        if tree.generation != self.generation {
            return Err(ConcurrentModification);
        }

        let next = match self.state {
            State::Done => return Ok(None),
            State::Start => self.descend_left(tree.root.as_deref()),
            State::At => {
                let current = self.walk(tree)?;
                match current.right.as_deref() {
                    Some(right) => {
                        self.path.push(Step::Right);
                        self.descend_left(Some(right))
                    },
                    None => self.ascend(tree)?,
                }
            },
        };

        match next {
            Some(node) => {
                self.state = State::At;
                Ok(Some(node.tuple()))
            },
            None => {
                self.state = State::Done;
                self.path.clear();
                Ok(None)
            },
        }
    }

    /// Starts the traversal again from the smallest key of `tree`, accepting its current
    /// generation.
    pub fn restart(&mut self, tree: &AvlTreeMap<K, V>) {
        *self = InOrderCursor::new(tree);
    }

    /// Returns true if the cursor can still step through `tree`.
    pub fn is_valid_for(&self, tree: &AvlTreeMap<K, V>) -> bool {
        tree.generation == self.generation
    }

    /// Follows `path` down from the root. The generation check guarantees the shape hasn't
    /// changed, so a missing child can only mean the cursor was handed the wrong tree.
    fn walk<'a>(
        &self,
        tree: &'a AvlTreeMap<K, V>,
    ) -> Result<&'a Node<K, V>, ConcurrentModification> {
        let mut node = tree.root.as_deref().ok_or(ConcurrentModification)?;
        for step in self.path.iter() {
            node = match step {
                Step::Left => node.left.as_deref(),
                Step::Right => node.right.as_deref(),
            }
            .ok_or(ConcurrentModification)?;
        }
        Ok(node)
    }

    fn descend_left<'a>(&mut self, start: Option<&'a Node<K, V>>) -> Option<&'a Node<K, V>> {
        let mut node = start?;
        while let Some(left) = node.left.as_deref() {
            self.path.push(Step::Left);
            node = left;
        }
        Some(node)
    }

    /// Climbs out of right subtrees until the path leaves a left child, whose parent is next.
    fn ascend<'a>(
        &mut self,
        tree: &'a AvlTreeMap<K, V>,
    ) -> Result<Option<&'a Node<K, V>>, ConcurrentModification> {
        while let Some(step) = self.path.pop() {
            if step == Step::Left {
                return self.walk(tree).map(Some);
            }
        }
        Ok(None)
    }
}

impl<K, V> Clone for InOrderCursor<K, V> {
    fn clone(&self) -> Self {
        InOrderCursor {
            path: self.path.clone(),
            state: self.state,
            generation: self.generation,
            _phantom: PhantomData,
        }
    }
}

impl<K, V> Debug for InOrderCursor<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InOrderCursor")
            .field("depth", &self.path.len())
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish()
    }
}
