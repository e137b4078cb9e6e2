use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to access the top of an empty collection!")]
pub struct EmptyCollection;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Collection was structurally modified while a traversal was in progress!")]
pub struct ConcurrentModification;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Invalid argument: {reason}")]
pub struct InvalidArgument {
    #[error(not(source))]
    pub reason: &'static str,
}

/// Every error a collection in this crate can produce, allowing callers to mix fallible
/// operations from different collections behind a single `?`.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyCollection(EmptyCollection),
    ConcurrentModification(ConcurrentModification),
    InvalidArgument(InvalidArgument),
}
