//! Case table abstraction.
//!
//! A case table maps labels to handlers. This module provides a trait-based
//! abstraction so that different backends (hash map, sorted vector, static
//! perfect-hash map) can be swapped without changing the dispatcher.

/// Result of a case table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a, H> {
    /// The label has a handler.
    Matched(&'a H),
    /// No handler is registered for the label.
    NotFound,
}

impl<'a, H> Lookup<'a, H> {
    /// Returns true if the label was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, Lookup::Matched(_))
    }

    /// Returns the matched handler, if any.
    pub fn matched(self) -> Option<&'a H> {
        match self {
            Lookup::Matched(h) => Some(h),
            Lookup::NotFound => None,
        }
    }
}

impl<'a, H> From<Option<&'a H>> for Lookup<'a, H> {
    fn from(found: Option<&'a H>) -> Self {
        match found {
            Some(h) => Lookup::Matched(h),
            None => Lookup::NotFound,
        }
    }
}

/// An immutable mapping from labels to handlers.
pub trait CaseTable<L: ?Sized, H>: Send + Sync {
    /// Look up the handler registered for `label`.
    fn lookup(&self, label: &L) -> Lookup<'_, H>;

    /// Number of registered cases.
    fn len(&self) -> usize;

    /// Check if the table has no cases.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `label` has a handler.
    fn contains(&self, label: &L) -> bool {
        self.lookup(label).is_matched()
    }
}

/// Builder for constructing case tables.
///
/// Insertion follows map semantics: registering a label again replaces the
/// previous handler and hands it back. Policies such as rejecting duplicates
/// are enforced by the caller through [`contains`](CaseTableBuilder::contains).
pub trait CaseTableBuilder<L, H>: Default + Send {
    /// The table type this builder produces.
    type Table: CaseTable<L, H>;

    /// Check if `label` has already been inserted.
    fn contains(&self, label: &L) -> bool;

    /// Insert a case, returning the handler it replaced.
    fn insert(&mut self, label: L, handler: H) -> Option<H>;

    /// Build the table, consuming the builder.
    fn build(self) -> Self::Table;
}
