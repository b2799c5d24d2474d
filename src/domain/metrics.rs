// ============================================================
// Layer 3 — Binary Classification Metrics
// ============================================================
// Confusion-matrix metrics over scored test records.
// Spam is the positive class.
//
//   accuracy            (tp + tn) / total
//   positive precision  tp / (tp + fp)
//   negative precision  tn / (tn + fn)
//   positive recall     tp / (tp + fn)
//   negative recall     tn / (tn + fp)
//   F1                  harmonic mean of positive precision and recall
//
// A ratio whose denominator is zero is reported as 0.

use serde::{Deserialize, Serialize};

use crate::domain::prediction::ScoredRecord;

/// Raw counts of predicted vs actual labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    pub fn from_scored(scored: &[ScoredRecord]) -> Self {
        let mut m = Self::default();
        for s in scored {
            match (s.prediction.is_spam, s.record.is_spam) {
                (true, true) => m.true_positives += 1,
                (true, false) => m.false_positives += 1,
                (false, false) => m.true_negatives += 1,
                (false, true) => m.false_negatives += 1,
            }
        }
        m
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }
}

/// The six evaluation figures reported after training.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryMetrics {
    pub accuracy: f64,
    pub f1_score: f64,
    pub positive_precision: f64,
    pub negative_precision: f64,
    pub positive_recall: f64,
    pub negative_recall: f64,
    pub confusion: ConfusionMatrix,
}

impl BinaryMetrics {
    pub fn from_scored(scored: &[ScoredRecord]) -> Self {
        Self::from_confusion(ConfusionMatrix::from_scored(scored))
    }

    pub fn from_confusion(confusion: ConfusionMatrix) -> Self {
        let ConfusionMatrix {
            true_positives: tp,
            false_positives: fp,
            true_negatives: tn,
            false_negatives: fn_count,
        } = confusion;

        let positive_precision = ratio(tp, tp + fp);
        let positive_recall = ratio(tp, tp + fn_count);
        let f1_score = if positive_precision + positive_recall > 0.0 {
            2.0 * positive_precision * positive_recall / (positive_precision + positive_recall)
        } else {
            0.0
        };

        Self {
            accuracy: ratio(tp + tn, confusion.total()),
            f1_score,
            positive_precision,
            negative_precision: ratio(tn, tn + fn_count),
            positive_recall,
            negative_recall: ratio(tn, tn + fp),
            confusion,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
