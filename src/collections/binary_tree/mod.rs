//! Ordered maps built on binary search trees.
//!
//! [`AvlTreeMap`] rebalances itself after every insertion and removal, while [`SearchTreeMap`]
//! is left to take whatever shape its keys give it. Both are re-exported here.

pub mod avl;
pub mod search;

#[doc(inline)]
pub use avl::AvlTreeMap;
#[doc(inline)]
pub use search::SearchTreeMap;
