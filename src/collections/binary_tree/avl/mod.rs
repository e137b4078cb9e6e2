//! A module containing [`AvlTreeMap`], a self-balancing binary search tree, along with its
//! iterators and the detached [`InOrderCursor`].

mod avl_tree_map;
mod cursor;
mod iter;
mod node;
mod tests;

pub use avl_tree_map::*;
pub use cursor::*;
pub use iter::*;
pub(crate) use node::*;
