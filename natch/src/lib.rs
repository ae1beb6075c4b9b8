//! # natch - Pattern Dispatch
//!
//! `natch` turns a classifier and a table of case handlers into a
//! dispatcher: each input is classified once, the handler registered for the
//! resulting label receives the input, and its output is returned.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use natch::{Case, match_on};
//!
//! type Step = fn(u64) -> u64;
//!
//! let collatz = match_on(
//!     |x: &u64| if x % 2 == 0 { "even" } else { "odd" },
//!     [("even", (|x: u64| x / 2) as Step), ("odd", |x: u64| x * 3 + 1)],
//! );
//!
//! assert_eq!(collatz.dispatch(4), Ok(2));
//! assert_eq!(collatz.dispatch(5), Ok(16));
//! ```
//!
//! ## Fallback
//!
//! Registering [`Case::Otherwise`] gives unmatched labels somewhere to go.
//! Without it, an unmatched label is reported as [`MissingHandlerError`]
//! naming the label. [`match_plain`] and [`MatchBuilder::plain`] build
//! dispatchers that never fall back.
//!
//! ## Features
//!
//! - `tracing`: log dispatch decisions with `tracing`
//! - `phf`: enable [`PhfCaseTable`](tables::PhfCaseTable)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod builder;
mod config;
mod dispatcher;
mod macros;

pub use natch_core::{
    // Handler
    BoxCaseHandler,
    // Error types
    BoxError,
    BuildError,
    // Cases
    Case,
    CaseHandler,
    CaseLabel,
    // Tables
    CaseTable,
    CaseTableBuilder,
    // Classifier
    Classifier,
    Lookup,
    MissingHandlerError,
    NatchError,
    otherwise,
};

pub use builder::MatchBuilder;
pub use config::{DuplicatePolicy, FallbackMode, MatchConfig};
pub use dispatcher::{Dispatcher, match_on, match_plain};

/// Case table implementations.
pub mod tables {
    #![allow(clippy::wildcard_imports)]
    pub use natch_std::tables::*;
}

/// Classifier wrappers for observing dispatch.
pub mod observe {
    pub use natch_std::observe::TracedClassifier;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use natch_std::testing::*;
}

/// Prelude module - common imports for natch.
///
/// # Usage
///
/// ```rust,ignore
/// use natch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Case, CaseHandler, Classifier, Dispatcher, MatchBuilder, MatchConfig, MissingHandlerError,
        match_on, match_plain, natch,
    };
}

#[cfg(feature = "phf")]
pub use natch_std::phf;
