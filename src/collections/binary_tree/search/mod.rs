//! A module containing [`SearchTreeMap`], an unbalanced binary search tree whose nodes live in an
//! arena and refer to each other, including their parents, by index.

mod iter;
mod node;
mod search_tree_map;

pub use iter::*;
pub(crate) use node::*;
pub use search_tree_map::*;
