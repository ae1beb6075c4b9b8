//! Classifier trait.

use crate::label::CaseLabel;

/// Maps an input to the label of the case that should handle it.
///
/// Classifiers are expected to be pure; a dispatcher calls
/// [`classify`](Classifier::classify) exactly once per dispatch.
///
/// Any `Fn(&I) -> L` closure or function pointer is a classifier:
///
/// ```rust,ignore
/// let parity = |x: &u64| if x % 2 == 0 { "even" } else { "odd" };
/// assert_eq!(parity.classify(&4), "even");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot classify inputs of type `{I}`",
    label = "missing `Classifier<{I}>` implementation",
    note = "Closures of the form `Fn(&{I}) -> Label` implement `Classifier<{I}>`."
)]
pub trait Classifier<I: ?Sized>: Send + Sync {
    /// The label type produced.
    type Label: CaseLabel;

    /// Computes the label for `input`.
    fn classify(&self, input: &I) -> Self::Label;
}

// Blanket impl for closures
impl<I, L, F> Classifier<I> for F
where
    I: ?Sized,
    L: CaseLabel,
    F: Fn(&I) -> L + Send + Sync,
{
    type Label = L;

    fn classify(&self, input: &I) -> Self::Label {
        (self)(input)
    }
}
