// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits, never
// against the CSV loader or the Burn model directly:
//
//   RecordSource   — anything that yields a labelled dataset
//   TextClassifier — the ML collaborator: split, fit, transform,
//                    evaluate and single-example prediction
//
// The pipeline driver is generic over both, so it runs in tests
// with an in-memory source and a stub classifier.

use crate::domain::error::{DatasetError, ModelError};
use crate::domain::metrics::BinaryMetrics;
use crate::domain::prediction::{Prediction, ScoredRecord};
use crate::domain::record::Record;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce an ordered dataset.
///
/// Implementations:
///   - CsvLoader → reads and validates a two-column CSV file
pub trait RecordSource {
    /// Load every record, or fail on the first malformed one.
    fn load_all(&self) -> Result<Vec<Record>, DatasetError>;
}

// ─── TextClassifier ───────────────────────────────────────────────────────────
/// A binary text classifier and the operations around it.
///
/// Implementations:
///   - BurnTextClassifier → TF-IDF features + logistic regression in Burn
pub trait TextClassifier {
    /// A fitted model, ready for prediction.
    type Model;

    /// Partition `dataset` into (train, test), holding out
    /// `test_fraction` of the records. Deterministic for a given seed.
    fn split(
        &self,
        dataset: Vec<Record>,
        test_fraction: f64,
        seed: u64,
    ) -> (Vec<Record>, Vec<Record>);

    /// Fit a model on the training partition.
    fn fit(&self, train: &[Record]) -> Result<Self::Model, ModelError>;

    /// Score every record in `data` with a fitted model.
    fn transform(
        &self,
        model: &Self::Model,
        data: &[Record],
    ) -> Result<Vec<ScoredRecord>, ModelError>;

    /// Compute evaluation metrics from scored records.
    fn evaluate(&self, scored: &[ScoredRecord]) -> BinaryMetrics {
        BinaryMetrics::from_scored(scored)
    }

    /// Predict a single text.
    fn predict_one(&self, model: &Self::Model, text: &str) -> Result<Prediction, ModelError>;
}
