//! Error types for natch.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`NatchError`] - Top-level error type
//! - [`MissingHandlerError`] - The computed label has no handler
//! - [`BuildError`] - A case registration was rejected

use std::fmt::Debug;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for natch operations.
#[derive(Error, Debug)]
pub enum NatchError {
    /// No handler matched the computed label.
    #[error("handler for case {0} is missing")]
    MissingHandler(String),

    /// The dispatcher could not be built.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// A custom error, usually raised by a handler.
    #[error(transparent)]
    Custom(BoxError),
}

/// Raised by a dispatch when the classifier produced a label with no
/// registered handler and no fallback applies.
///
/// Carries the unmatched label so callers can see which case is missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("handler for case {label:?} is missing")]
pub struct MissingHandlerError<L> {
    label: L,
}

impl<L> MissingHandlerError<L> {
    /// Creates the error for an unmatched `label`.
    pub const fn new(label: L) -> Self {
        Self { label }
    }

    /// The label that had no handler.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Consumes the error, returning the unmatched label.
    pub fn into_label(self) -> L {
        self.label
    }
}

/// Errors that can occur while building a dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A case was registered twice while duplicates are rejected.
    #[error("duplicate case: {0}")]
    DuplicateCase(String),

    /// A fallback was registered on a dispatcher without fallback support.
    #[error("fallback case registered but fallback support is disabled")]
    FallbackDisabled,
}

// Convenience conversions
impl<L: Debug> From<MissingHandlerError<L>> for NatchError {
    fn from(err: MissingHandlerError<L>) -> Self {
        NatchError::MissingHandler(format!("{:?}", err.label))
    }
}

impl From<BoxError> for NatchError {
    fn from(err: BoxError) -> Self {
        NatchError::Custom(err)
    }
}
