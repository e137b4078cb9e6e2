//! Heap-based collections.

pub mod priority_queue;

#[doc(inline)]
pub use priority_queue::PriorityQueue;
