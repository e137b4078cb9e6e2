use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, rather than quoting it.
#[cfg(any(feature = "hash", feature = "tree"))]
pub struct DebugRaw(pub String);

#[cfg(any(feature = "hash", feature = "tree"))]
impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Prefixes every line of `text` with `prefix`, used when drawing subtrees.
#[cfg(feature = "tree")]
pub fn indent_lines(prefix: &str, text: &str) -> String {
    text.lines()
        .map(|l| String::from(prefix) + l)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Debug formats the items of a cloneable iterator as a list, without consuming the original.
pub struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
