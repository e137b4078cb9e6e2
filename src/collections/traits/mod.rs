//! Traits describing capabilities shared between collections.

pub mod comparator;

#[doc(inline)]
pub use comparator::{Comparator, Natural, Reverse};
