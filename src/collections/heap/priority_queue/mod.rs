mod iter;
mod priority_queue;

pub use iter::*;
pub use priority_queue::*;
