//! Classifier wrapper for observing dispatch decisions.

use natch_core::Classifier;

/// A classifier that logs every label produced by the wrapped classifier.
///
/// With the `tracing` feature disabled this is a plain pass-through.
pub struct TracedClassifier<C> {
    inner: C,
    name: &'static str,
}

impl<C> TracedClassifier<C> {
    /// Wrap `inner`, tagging log records with `name`.
    pub const fn new(name: &'static str, inner: C) -> Self {
        Self { inner, name }
    }

    /// The name used in log records.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Unwrap the inner classifier.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<I, C> Classifier<I> for TracedClassifier<C>
where
    I: ?Sized,
    C: Classifier<I>,
{
    type Label = C::Label;

    fn classify(&self, input: &I) -> Self::Label {
        let label = self.inner.classify(input);
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(classifier = self.name, label = ?label, "classified input");
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::TracedClassifier;
    use natch_core::Classifier;

    #[test]
    fn test_passes_label_through() {
        let traced = TracedClassifier::new("len", |s: &str| s.len());
        assert_eq!(traced.classify("four"), 4);
        assert_eq!(traced.name(), "len");
    }
}
