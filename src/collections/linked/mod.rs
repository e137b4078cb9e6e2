//! Linked collection types. [`LinkedList`] is doubly linked and doubles as the collision chain of
//! [`HashMap`](crate::collections::hash::HashMap), while [`ForwardList`] only links forwards.

pub mod forward;
pub mod list;

#[doc(inline)]
pub use forward::ForwardList;
#[doc(inline)]
pub use list::LinkedList;
