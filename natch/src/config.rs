//! Construction-time configuration for [`MatchBuilder`].
//!
//! [`MatchBuilder`]: crate::MatchBuilder

/// Whether a dispatcher accepts a [`Case::Otherwise`] registration.
///
/// [`Case::Otherwise`]: natch_core::Case::Otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackMode {
    /// A fallback case may be registered and is used for unmatched labels.
    #[default]
    Enabled,
    /// Unmatched labels always fail; registering a fallback is a build error.
    Disabled,
}

/// How repeated registrations of the same case are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later registration replaces the earlier one.
    #[default]
    LastWins,
    /// A repeated case is a build error.
    Reject,
}

/// Options applied when a [`MatchBuilder`] builds its dispatcher.
///
/// # Example
///
/// ```rust,ignore
/// let config = MatchConfig::new().with_duplicates(DuplicatePolicy::Reject);
/// let dispatcher = MatchBuilder::new(classify).config(config).case("a", a).build()?;
/// ```
///
/// [`MatchBuilder`]: crate::MatchBuilder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchConfig {
    /// Fallback support.
    pub fallback: FallbackMode,
    /// Duplicate handling.
    pub duplicates: DuplicatePolicy,
}

impl MatchConfig {
    /// Fallback enabled, last registration wins.
    pub const fn new() -> Self {
        Self {
            fallback: FallbackMode::Enabled,
            duplicates: DuplicatePolicy::LastWins,
        }
    }

    /// Fallback disabled, last registration wins.
    pub const fn plain() -> Self {
        Self::new().with_fallback(FallbackMode::Disabled)
    }

    /// Set the fallback mode.
    pub const fn with_fallback(mut self, fallback: FallbackMode) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the duplicate policy.
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Returns true when a fallback case may be registered.
    pub const fn allows_fallback(&self) -> bool {
        matches!(self.fallback, FallbackMode::Enabled)
    }
}
