// ============================================================
// Layer 3 — Prediction Domain Types
// ============================================================
// What the classifier says about a single text, and a test
// record paired with that verdict for evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::record::Record;

/// Probability at or above which a text is labelled spam.
pub const DECISION_THRESHOLD: f32 = 0.5;

/// A single-example verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted label.
    pub is_spam: bool,

    /// Probability of the spam class, in [0, 1].
    pub probability: f32,
}

impl Prediction {
    /// Derive the label from the spam-class probability.
    pub fn from_probability(probability: f32) -> Self {
        Self {
            is_spam: probability >= DECISION_THRESHOLD,
            probability,
        }
    }

    /// Human-readable label, as printed in reports.
    pub fn label(&self) -> &'static str {
        if self.is_spam {
            "spam"
        } else {
            "not spam"
        }
    }
}

/// A held-out record together with the model's prediction for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub record: Record,
    pub prediction: Prediction,
}

impl ScoredRecord {
    pub fn new(record: Record, prediction: Prediction) -> Self {
        Self { record, prediction }
    }
}
