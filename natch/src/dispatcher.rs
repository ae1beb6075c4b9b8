//! # Dispatcher
//!
//! A [`Dispatcher`] owns a classifier, an immutable case table and an
//! optional fallback handler. Every dispatch classifies the input once, picks
//! the handler for the resulting label (or the fallback), and calls it with
//! the input.
//!
//! # Construction
//!
//! | Entry point | Fallback | Duplicates | Table |
//! |-------------|----------|------------|-------|
//! | [`match_on`] | `Case::Otherwise` pairs | last wins | hash |
//! | [`match_plain`] | none | last wins | hash |
//! | [`MatchBuilder`] | configurable | configurable | any [`CaseTableBuilder`] |
//! | [`Dispatcher::from_parts`] | caller supplied | n/a | any [`CaseTable`] |
//!
//! [`MatchBuilder`]: crate::MatchBuilder
//! [`CaseTableBuilder`]: natch_core::CaseTableBuilder

use natch_core::{
    Case, CaseHandler, CaseTable, CaseTableBuilder, Classifier, Lookup, MissingHandlerError,
};
use natch_std::tables::{HashCaseTable, HashCaseTableBuilder};
use std::{fmt, marker::PhantomData};

/// Classifies inputs and forwards them to the handler registered for their
/// case.
///
/// The case table is never modified after construction, so a dispatcher can
/// be shared across threads whenever its classifier and handlers can.
pub struct Dispatcher<I, C, T, H> {
    classify: C,
    table: T,
    otherwise: Option<H>,
    _input: PhantomData<fn(I)>,
}

impl<I, C, T, H> Dispatcher<I, C, T, H>
where
    C: Classifier<I>,
    T: CaseTable<C::Label, H>,
    H: CaseHandler<I>,
{
    /// Assemble a dispatcher from an already built table.
    pub fn from_parts(classify: C, table: T, otherwise: Option<H>) -> Self {
        Self {
            classify,
            table,
            otherwise,
            _input: PhantomData,
        }
    }

    /// Classify `input` and return the handler that would receive it.
    pub fn resolve(&self, input: &I) -> Result<&H, MissingHandlerError<C::Label>> {
        let label = self.classify.classify(input);
        self.resolve_label(label)
    }

    fn resolve_label(&self, label: C::Label) -> Result<&H, MissingHandlerError<C::Label>> {
        #[cfg(feature = "tracing")]
        tracing::trace!(label = ?label, "dispatching");

        if let Lookup::Matched(handler) = self.table.lookup(&label) {
            return Ok(handler);
        }

        match &self.otherwise {
            Some(handler) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(label = ?label, "no case matched, using fallback");
                Ok(handler)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(label = ?label, "no handler for case");
                Err(MissingHandlerError::new(label))
            }
        }
    }

    /// Dispatch `input` to the handler for its case.
    ///
    /// # Errors
    ///
    /// Returns [`MissingHandlerError`] carrying the computed label when the
    /// label has no handler and no fallback is registered. The handler is
    /// not called in that case.
    pub fn dispatch(&self, input: I) -> Result<H::Output, MissingHandlerError<C::Label>> {
        let handler = self.resolve(&input)?;
        Ok(handler.call(input))
    }

    /// Dispatch to a fallible handler, flattening the missing-handler error
    /// into the handler's own error type.
    ///
    /// Errors returned by the handler pass through unchanged.
    pub fn try_dispatch<R, E>(&self, input: I) -> Result<R, E>
    where
        H: CaseHandler<I, Output = Result<R, E>>,
        E: From<MissingHandlerError<C::Label>>,
    {
        self.dispatch(input)?
    }

    /// Returns true if `input` would reach a handler (its own case or the
    /// fallback).
    pub fn handles(&self, input: &I) -> bool {
        self.resolve(input).is_ok()
    }

    /// Returns true if a fallback handler is registered.
    pub fn has_fallback(&self) -> bool {
        self.otherwise.is_some()
    }

    /// Number of ordinary cases, not counting the fallback.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if no ordinary case is registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Get a reference to the case table.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Turn the dispatcher into a plain function.
    pub fn into_fn(self) -> impl Fn(I) -> Result<H::Output, MissingHandlerError<C::Label>> {
        move |input| self.dispatch(input)
    }
}

impl<I, C, T, H> fmt::Debug for Dispatcher<I, C, T, H>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("table", &self.table)
            .field("has_fallback", &self.otherwise.is_some())
            .finish_non_exhaustive()
    }
}

/// Build a dispatcher from a classifier and `(case, handler)` pairs.
///
/// Cases are labels or [`Case::Otherwise`]; the latter registers the
/// fallback. A later pair for the same case replaces an earlier one.
///
/// # Example
///
/// ```rust,ignore
/// type Step = fn(u64) -> u64;
///
/// let collatz = match_on(
///     |x: &u64| if x % 2 == 0 { "even" } else { "odd" },
///     [("even", (|x: u64| x / 2) as Step), ("odd", |x: u64| x * 3 + 1)],
/// );
/// assert_eq!(collatz.dispatch(5), Ok(16));
/// ```
pub fn match_on<I, C, K, H, P>(
    classify: C,
    cases: P,
) -> Dispatcher<I, C, HashCaseTable<C::Label, H>, H>
where
    C: Classifier<I>,
    H: CaseHandler<I>,
    P: IntoIterator<Item = (K, H)>,
    K: Into<Case<C::Label>>,
{
    let mut builder = HashCaseTableBuilder::default();
    let mut otherwise = None;
    for (case, handler) in cases {
        match case.into() {
            Case::Is(label) => {
                builder.insert(label, handler);
            }
            Case::Otherwise => otherwise = Some(handler),
        }
    }
    Dispatcher::from_parts(classify, builder.build(), otherwise)
}

/// Build a dispatcher without fallback support.
///
/// Only labels can be registered, so every unmatched label fails with
/// [`MissingHandlerError`]. A later pair for the same label replaces an
/// earlier one.
pub fn match_plain<I, C, H, P>(
    classify: C,
    cases: P,
) -> Dispatcher<I, C, HashCaseTable<C::Label, H>, H>
where
    C: Classifier<I>,
    H: CaseHandler<I>,
    P: IntoIterator<Item = (C::Label, H)>,
{
    let table = cases.into_iter().collect();
    Dispatcher::from_parts(classify, table, None)
}
