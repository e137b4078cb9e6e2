use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`] value, otherwise panics with the [`Display`](std::fmt::Display) message
    /// of the error. Every panicking twin of a `try_` method is built on this, and the panic is
    /// reported at the caller's location rather than here.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    #[track_caller]
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
