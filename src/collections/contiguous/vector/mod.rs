//! A module containing [`Vector`] and associated types.
//!
//! The other included types provide owned and borrowed iteration over a Vector.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;
