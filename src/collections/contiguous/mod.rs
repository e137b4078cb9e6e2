//! Contiguous collection types. [`Array`] is a fixed size buffer chosen at runtime and [`Vector`]
//! is a dynamic array that grows on top of it.

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::Vector;
