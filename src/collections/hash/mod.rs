//! Hash-based collections, which rely on the [`Hash`](std::hash::Hash) trait to find a bucket for
//! each key.
//!
//! [`HashMap`] resolves collisions by chaining: every bucket holds a
//! [`LinkedList`](crate::collections::linked::LinkedList) of the entries that landed in it.

pub mod map;

#[doc(inline)]
pub use map::HashMap;
