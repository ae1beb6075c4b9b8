//! Label trait for classification results.

use std::{fmt::Debug, hash::Hash};

/// A marker trait for values a [`Classifier`] may produce.
///
/// Labels must be comparable so they can key a case table, printable so an
/// unmatched label can be reported in [`MissingHandlerError`], and
/// thread-safe so a built dispatcher can be shared.
///
/// [`Classifier`]: crate::Classifier
/// [`MissingHandlerError`]: crate::MissingHandlerError
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a case label",
    label = "must be `Eq + Hash + Debug + Send + Sync`",
    note = "Case labels are compared against the case table and printed when no handler matches."
)]
pub trait CaseLabel: Eq + Hash + Debug + Send + Sync {}

impl<T: Eq + Hash + Debug + Send + Sync> CaseLabel for T {}
