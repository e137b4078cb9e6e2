mod forward_list;
mod iter;
mod tests;

pub use forward_list::*;
pub use iter::*;
