//! A last-in first-out [`Stack`], backed by a [`LinkedList`](crate::collections::linked::LinkedList).

mod stack;
mod tests;

pub use stack::*;
