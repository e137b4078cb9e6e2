//! Classic data structures, written from scratch as a learning exercise.
//!
//! # Purpose
//! This crate reimplements the collections that every data structures course covers: a dynamic
//! array, singly and doubly linked lists, a stack, binary search trees (both a plain one and a
//! self-balancing AVL tree), a hash map with separate chaining and a binary heap priority queue.
//! Writing them is the point, so none of them are meant to replace the standard library.
//!
//! # Method
//! The two structures with the most going on are [`AvlTreeMap`](collections::binary_tree::AvlTreeMap)
//! and [`HashMap`](collections::hash::HashMap). The tree rebalances itself with single and double
//! rotations after every insertion or removal, and offers a detached
//! [`InOrderCursor`](collections::binary_tree::avl::InOrderCursor) that fails fast once the tree
//! it walks has been structurally modified. The map chains colliding entries into a
//! [`LinkedList`](collections::linked::LinkedList) per bucket, and doubles its buckets once the
//! number of entries passes the threshold set by its load factor.
//!
//! # Error Handling
//! Methods that can fail because of their arguments come in pairs: a `try_` method that returns a
//! [`Result`] and a plain method that panics with the error's message. Not everyone wants to handle
//! an out of bounds index every time they read from a Vector. Errors are small structs that
//! implement [`Error`](std::error::Error), and can be gathered into a single
//! [`CollectionError`] so that `?` works across collections.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types, because the derive macros remove a
//! lot of very repetitive programming. Nothing else is needed outside of tests.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{
    CollectionError, ConcurrentModification, EmptyCollection, IndexOutOfBounds, InvalidArgument,
};
