#[cfg(all(test, any(feature = "contiguous", feature = "linked")))]
pub mod alloc;
pub mod error;
#[cfg(any(feature = "contiguous", feature = "linked"))]
pub mod fmt;
#[cfg(all(test, feature = "hash"))]
pub mod hash;
#[cfg(feature = "tree")]
pub mod option;
#[cfg(all(test, any(feature = "contiguous", feature = "linked")))]
pub mod panic;
#[cfg(any(feature = "contiguous", feature = "linked"))]
pub mod result;
