//! # natch-std
//!
//! Standard implementations for the natch pattern-dispatch helper.
//!
//! This crate provides:
//! - **Case tables**: [`HashCaseTable`], [`SortedCaseTable`], and
//!   `PhfCaseTable` (with the `phf` feature)
//! - **Observation**: [`TracedClassifier`]
//! - **Testing utilities**: [`testing`]
//!
//! [`HashCaseTable`]: tables::HashCaseTable
//! [`SortedCaseTable`]: tables::SortedCaseTable
//! [`TracedClassifier`]: observe::TracedClassifier

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use natch_core;

// Modules
pub mod observe;
pub mod tables;
pub mod testing;

#[cfg(feature = "phf")]
pub use phf;
