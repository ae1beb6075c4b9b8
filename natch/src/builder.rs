//! Builder for dispatchers with heterogeneous handlers.
//!
//! [`match_on`](crate::match_on) needs every handler to have the same type.
//! [`MatchBuilder`] boxes each handler instead, so distinct closures can be
//! registered side by side, and applies a [`MatchConfig`] when building.

use crate::{
    config::{DuplicatePolicy, FallbackMode, MatchConfig},
    dispatcher::Dispatcher,
};
use natch_core::{
    BoxCaseHandler, BuildError, Case, CaseHandler, CaseLabel, CaseTableBuilder, Classifier,
};
use natch_std::tables::HashCaseTableBuilder;
use std::marker::PhantomData;

/// Collects cases and builds a [`Dispatcher`] over boxed handlers.
///
/// Cases are kept in registration order until [`build`](Self::build), where
/// they are folded into a table of type `B::Table`.
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = MatchBuilder::new(|n: &i64| n.signum())
///     .case(-1, |n: i64| format!("{n} is negative"))
///     .case(1, |n: i64| format!("{n} is positive"))
///     .otherwise(|_| "zero".to_string())
///     .build()?;
/// ```
pub struct MatchBuilder<I, O, L, C, B = HashCaseTableBuilder<L, BoxCaseHandler<I, O>>> {
    classify: C,
    config: MatchConfig,
    cases: Vec<(Case<L>, BoxCaseHandler<I, O>)>,
    _table: PhantomData<fn() -> B>,
}

impl<I, O, L, C> MatchBuilder<I, O, L, C>
where
    C: Classifier<I, Label = L>,
{
    /// Start a builder with the default configuration and a hash table.
    pub fn new(classify: C) -> Self {
        Self {
            classify,
            config: MatchConfig::new(),
            cases: Vec::new(),
            _table: PhantomData,
        }
    }
}

impl<I, O, L, C, B> MatchBuilder<I, O, L, C, B>
where
    C: Classifier<I, Label = L>,
{
    /// Replace the configuration.
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Disable fallback support.
    pub fn plain(mut self) -> Self {
        self.config.fallback = FallbackMode::Disabled;
        self
    }

    /// Make a repeated case a build error instead of a replacement.
    pub fn reject_duplicates(mut self) -> Self {
        self.config.duplicates = DuplicatePolicy::Reject;
        self
    }

    /// Build into a different table type.
    pub fn table<B2>(self) -> MatchBuilder<I, O, L, C, B2> {
        MatchBuilder {
            classify: self.classify,
            config: self.config,
            cases: self.cases,
            _table: PhantomData,
        }
    }

    /// Register a closure for `label`.
    pub fn case<F>(self, label: impl Into<L>, handler: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        self.case_handler(label, handler)
    }

    /// Register a handler for `label`.
    pub fn case_handler<H>(mut self, label: impl Into<L>, handler: H) -> Self
    where
        H: CaseHandler<I, Output = O> + 'static,
    {
        self.cases
            .push((Case::Is(label.into()), BoxCaseHandler::new(handler)));
        self
    }

    /// Register a closure as the fallback.
    pub fn otherwise<F>(self, handler: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        self.otherwise_handler(handler)
    }

    /// Register a handler as the fallback.
    pub fn otherwise_handler<H>(mut self, handler: H) -> Self
    where
        H: CaseHandler<I, Output = O> + 'static,
    {
        self.cases.push((Case::Otherwise, BoxCaseHandler::new(handler)));
        self
    }

    /// Register `(case, handler)` pairs in order.
    pub fn cases<K, H, P>(mut self, pairs: P) -> Self
    where
        P: IntoIterator<Item = (K, H)>,
        K: Into<Case<L>>,
        H: CaseHandler<I, Output = O> + 'static,
    {
        self.cases.extend(
            pairs
                .into_iter()
                .map(|(case, handler)| (case.into(), BoxCaseHandler::new(handler))),
        );
        self
    }

    /// Build the dispatcher.
    ///
    /// # Errors
    ///
    /// - [`BuildError::FallbackDisabled`] if a fallback was registered while
    ///   [`FallbackMode::Disabled`] is configured.
    /// - [`BuildError::DuplicateCase`] if a case repeats while
    ///   [`DuplicatePolicy::Reject`] is configured.
    pub fn build(self) -> Result<Dispatcher<I, C, B::Table, BoxCaseHandler<I, O>>, BuildError>
    where
        L: CaseLabel,
        B: CaseTableBuilder<L, BoxCaseHandler<I, O>>,
    {
        let reject = self.config.duplicates == DuplicatePolicy::Reject;
        let mut table = B::default();
        let mut otherwise = None;

        for (case, handler) in self.cases {
            match case {
                Case::Is(label) => {
                    if table.contains(&label) {
                        if reject {
                            return Err(BuildError::DuplicateCase(format!("{label:?}")));
                        }
                        #[cfg(feature = "tracing")]
                        tracing::trace!(label = ?label, "replacing earlier handler");
                    }
                    table.insert(label, handler);
                }
                Case::Otherwise => {
                    if !self.config.allows_fallback() {
                        return Err(BuildError::FallbackDisabled);
                    }
                    if reject && otherwise.is_some() {
                        return Err(BuildError::DuplicateCase("Otherwise".to_string()));
                    }
                    otherwise = Some(handler);
                }
            }
        }

        let table = table.build();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            cases = natch_core::CaseTable::len(&table),
            fallback = otherwise.is_some(),
            "built dispatcher"
        );
        Ok(Dispatcher::from_parts(self.classify, table, otherwise))
    }
}
