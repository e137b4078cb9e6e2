//! Various general-purpose collection types.
//!
//! # Purpose
//! Each collection here is a small, self-contained exercise in one classic data structure,
//! mirroring the API of the standard library's equivalent where there is one.
//!
//! # Method
//! The collections build on each other where it makes sense: [`Vector`](contiguous::Vector) is
//! built on [`Array`](contiguous::Array), the chains of [`HashMap`](hash::HashMap) are
//! [`LinkedList`](linked::LinkedList)s and the [`Stack`](stack::Stack) sits on top of one too.
//! Every collection is behind its own Cargo feature.

#[cfg(feature = "tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "traits")]
pub mod traits;
