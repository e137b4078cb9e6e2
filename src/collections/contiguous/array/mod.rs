//! A module containing [`Array`] and associated types.
//!
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration through [`Deref`](std::ops::Deref).
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod tests;

pub use array::*;
