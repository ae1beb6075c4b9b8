//! Case keys, including the reserved fallback sentinel.

/// A key under which a handler is registered.
///
/// Ordinary cases wrap a label. [`Case::Otherwise`] is the fallback
/// sentinel: it is consulted only when the computed label has no entry of
/// its own. A classifier returns a bare label, never a `Case`, so no
/// classification result can ever be equal to the sentinel.
///
/// # Example
///
/// ```rust,ignore
/// let cases = [
///     (Case::Is("a"), handle_a as fn(&str) -> i32),
///     (Case::Otherwise, handle_rest),
/// ];
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Case<L> {
    /// An ordinary case matching one label.
    Is(L),
    /// The fallback case.
    Otherwise,
}

impl<L> Case<L> {
    /// Returns true for the fallback sentinel.
    pub const fn is_otherwise(&self) -> bool {
        matches!(self, Case::Otherwise)
    }

    /// Returns the wrapped label of an ordinary case.
    pub fn label(&self) -> Option<&L> {
        match self {
            Case::Is(label) => Some(label),
            Case::Otherwise => None,
        }
    }

    /// Converts into the wrapped label, if any.
    pub fn into_label(self) -> Option<L> {
        match self {
            Case::Is(label) => Some(label),
            Case::Otherwise => None,
        }
    }
}

impl<L> From<L> for Case<L> {
    fn from(label: L) -> Self {
        Case::Is(label)
    }
}

/// The fallback sentinel for labels of type `L`.
///
/// Equivalent to [`Case::Otherwise`]; handy when the label type has to be
/// inferred.
pub const fn otherwise<L>() -> Case<L> {
    Case::Otherwise
}
