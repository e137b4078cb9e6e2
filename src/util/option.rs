pub(crate) trait OptionExtension<T> {
    /// Acts like [`Option::unwrap`] for values that are guaranteed by a collection's own
    /// invariants, such as an arena index that is known to refer to a live node.
    ///
    /// This does panic if used incorrectly, but panic docs are left off because the whole point is
    /// that None is impossible wherever it is called.
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("a collection invariant was broken"),
        }
    }
}
