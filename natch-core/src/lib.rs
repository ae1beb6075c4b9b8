//! # natch-core
//!
//! Core traits and value types for the natch pattern-dispatch helper.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that supplies its own classifiers, handlers or case-table backends without
//! pulling in `natch-std`.
//!
//! # Building Blocks
//!
//! A dispatch is always the same three steps:
//!
//! 1. A [`Classifier`] looks at the input and produces a label.
//! 2. A [`CaseTable`] maps that label to a handler. When nothing matches, the
//!    [`Case::Otherwise`] entry (if any) is used instead.
//! 3. The chosen [`CaseHandler`] consumes the input and produces the output.
//!
//! # Error Types
//!
//! - [`MissingHandlerError`] - No handler for the computed label
//! - [`BuildError`] - Rejected case registrations
//! - [`NatchError`] - Top-level error type

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod case;
mod classifier;
mod error;
mod handler;
mod label;
mod table;

// Re-exports
pub use case::{Case, otherwise};
pub use classifier::Classifier;
pub use error::{BoxError, BuildError, MissingHandlerError, NatchError};
pub use handler::{BoxCaseHandler, CaseHandler};
pub use label::CaseLabel;
pub use table::{CaseTable, CaseTableBuilder, Lookup};
