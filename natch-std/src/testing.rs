//! Testing utilities for natch.
//!
//! This module provides utilities to make testing dispatchers easier.
//!
//! # Features
//!
//! - [`ConstClassifier`]: A classifier that always returns the same label
//! - [`RecordingHandler`]: A handler that records every input it receives
//! - [`CountingHandler`]: A handler that counts invocations

use natch_core::{CaseHandler, CaseLabel, Classifier};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Const Classifier
// ============================================================================

/// A classifier that ignores its input and always returns one label.
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = match_on(ConstClassifier::new("z"), cases);
/// ```
#[derive(Debug, Clone)]
pub struct ConstClassifier<L> {
    label: L,
}

impl<L> ConstClassifier<L> {
    /// Create a classifier that always returns `label`.
    pub const fn new(label: L) -> Self {
        Self { label }
    }
}

impl<I, L> Classifier<I> for ConstClassifier<L>
where
    I: ?Sized,
    L: CaseLabel + Clone,
{
    type Label = L;

    fn classify(&self, _input: &I) -> Self::Label {
        self.label.clone()
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records all inputs it receives and returns a fixed output.
///
/// Clones share the same record, so one clone can be registered while the
/// other is inspected.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new("handled");
/// let dispatcher = match_plain(classify, [("a", recorder.clone())]);
///
/// dispatcher.dispatch(input)?;
/// assert_eq!(recorder.inputs().len(), 1);
/// ```
pub struct RecordingHandler<I, O> {
    inputs: Arc<Mutex<Vec<I>>>,
    output: O,
}

impl<I, O> RecordingHandler<I, O> {
    /// Create a recording handler that returns `output`.
    pub fn new(output: O) -> Self {
        Self {
            inputs: Arc::new(Mutex::new(Vec::new())),
            output,
        }
    }

    /// Get a clone of the recorded inputs.
    pub fn inputs(&self) -> Vec<I>
    where
        I: Clone,
    {
        self.inputs.lock().unwrap().clone()
    }

    /// Get the number of recorded inputs.
    pub fn count(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }

    /// Clear all recorded inputs.
    pub fn clear(&self) {
        self.inputs.lock().unwrap().clear();
    }
}

impl<I, O: Clone> Clone for RecordingHandler<I, O> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
        }
    }
}

impl<I, O> CaseHandler<I> for RecordingHandler<I, O>
where
    I: Send,
    O: Clone + Send + Sync,
{
    type Output = O;

    fn call(&self, input: I) -> Self::Output {
        self.inputs.lock().unwrap().push(input);
        self.output.clone()
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and returns the running count.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// let dispatcher = match_on(classify, [(Case::Otherwise, counter.clone())]);
///
/// dispatcher.dispatch(input)?;
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<I> CaseHandler<I> for CountingHandler {
    type Output = usize;

    fn call(&self, _input: I) -> Self::Output {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::{ConstClassifier, CountingHandler, RecordingHandler};
    use natch_core::{CaseHandler, Classifier};

    #[test]
    fn test_const_classifier_ignores_input() {
        let classifier = ConstClassifier::new("z");
        assert_eq!(Classifier::<u8>::classify(&classifier, &1), "z");
        assert_eq!(Classifier::<str>::classify(&classifier, "anything"), "z");
    }

    #[test]
    fn test_recording_handler_shares_record() {
        let recorder = RecordingHandler::new(true);
        let clone = recorder.clone();

        assert!(clone.call("first"));
        assert!(clone.call("second"));

        assert_eq!(recorder.inputs(), vec!["first", "second"]);
        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_counting_handler() {
        let counter = CountingHandler::new();
        assert_eq!(CaseHandler::<()>::call(&counter, ()), 1);
        assert_eq!(CaseHandler::<u8>::call(&counter.clone(), 9), 2);
        assert_eq!(counter.count(), 2);
        counter.reset();
        assert_eq!(counter.count(), 0);
    }
}
