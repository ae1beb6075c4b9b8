#![allow(dead_code)]

use natch::Classifier;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Inputs
// ============================================================================

pub type Step = fn(u64) -> u64;

pub fn parity(x: &u64) -> &'static str {
    if x % 2 == 0 { "even" } else { "odd" }
}

pub fn halve(x: u64) -> u64 {
    x / 2
}

pub fn triple_plus_one(x: u64) -> u64 {
    x * 3 + 1
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
    Triangle { base: f64, height: f64 },
}

pub fn shape_kind(shape: &Shape) -> &'static str {
    match shape {
        Shape::Circle { .. } => "circle",
        Shape::Square { .. } => "square",
        Shape::Triangle { .. } => "triangle",
    }
}

// ============================================================================
// Test Classifiers
// ============================================================================

/// Counts how often it is asked to classify.
pub struct CountingClassifier {
    pub calls: Arc<AtomicUsize>,
}

impl CountingClassifier {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl Classifier<u64> for CountingClassifier {
    type Label = &'static str;

    fn classify(&self, input: &u64) -> Self::Label {
        self.calls.fetch_add(1, Ordering::SeqCst);
        parity(input)
    }
}
