// ============================================================
// Layer 2 — PipelineUseCase
// ============================================================
// Orchestrates one full run, strictly in order:
//
//   Step 1: Validate configuration          (this layer)
//   Step 2: Load and validate the CSV       (Layer 4 - data)
//   Step 3: Split train / test              (ML collaborator)
//   Step 4: Fit the classifier              (ML collaborator)
//   Step 5: Score the test partition        (ML collaborator)
//   Step 6: Evaluate                        (ML collaborator)
//   Step 7: Predict the example texts       (ML collaborator)
//
// The use case returns a PipelineReport; printing it is Layer 1's job.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::error::PipelineError;
use crate::domain::metrics::BinaryMetrics;
use crate::domain::prediction::Prediction;
use crate::domain::record::ClassCounts;
use crate::domain::traits::{RecordSource, TextClassifier};

// ─── Trainer Configuration ───────────────────────────────────────────────────
/// Hyperparameters of the featurizer and the training loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    /// L2 weight decay; 0 disables it.
    pub l2_penalty: f32,
    /// Largest vocabulary kept, most frequent terms first.
    pub max_vocab: usize,
    /// Minimum number of training texts a term must appear in.
    pub min_df: usize,
    /// Longest word n-gram used as a feature (1 = unigrams only).
    pub word_ngrams: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: 30,
            batch_size: 32,
            learning_rate: 0.05,
            l2_penalty: 1e-4,
            max_vocab: 5000,
            min_df: 1,
            word_ngrams: 2,
        }
    }
}

// ─── Pipeline Configuration ──────────────────────────────────────────────────
/// Everything a run needs. Every field has a default, so a JSON
/// config file only has to name the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub data_path: PathBuf,
    pub seed: u64,
    /// Fraction of records held out for testing, in [0, 1).
    pub test_fraction: f64,
    /// Name of the text column, used in reports.
    pub text_column: String,
    /// Name of the label column, used in reports.
    pub label_column: String,
    /// Texts to classify after evaluation.
    pub examples: Vec<String>,
    /// Optional CSV file receiving per-epoch training metrics.
    pub metrics_csv: Option<PathBuf>,
    pub trainer: TrainerConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("emails.csv"),
            seed: 0,
            test_fraction: 0.2,
            text_column: "Text".to_string(),
            label_column: "IsSpam".to_string(),
            examples: vec![
                "Buy one, get one free!".to_string(),
                "Meeting scheduled for tomorrow at 2 PM".to_string(),
            ],
            metrics_csv: None,
            trainer: TrainerConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, PipelineError> {
        let json = std::fs::read_to_string(path).map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|e| {
            PipelineError::config(format!("cannot parse '{}': {e}", path.display()))
        })
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !(0.0..1.0).contains(&self.test_fraction) {
            return Err(PipelineError::config(format!(
                "test_fraction must be in [0, 1), got {}",
                self.test_fraction
            )));
        }
        let t = &self.trainer;
        if t.epochs == 0 {
            return Err(PipelineError::config("epochs must be at least 1"));
        }
        if t.batch_size == 0 {
            return Err(PipelineError::config("batch_size must be at least 1"));
        }
        if !(t.learning_rate.is_finite() && t.learning_rate > 0.0) {
            return Err(PipelineError::config(format!(
                "learning_rate must be positive, got {}",
                t.learning_rate
            )));
        }
        if !(t.l2_penalty.is_finite() && t.l2_penalty >= 0.0) {
            return Err(PipelineError::config(format!(
                "l2_penalty must be non-negative, got {}",
                t.l2_penalty
            )));
        }
        if t.max_vocab == 0 {
            return Err(PipelineError::config("max_vocab must be at least 1"));
        }
        if t.word_ngrams == 0 {
            return Err(PipelineError::config("word_ngrams must be at least 1"));
        }
        Ok(())
    }
}

// ─── Report ──────────────────────────────────────────────────────────────────
/// One example text and what the model made of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamplePrediction {
    pub text: String,
    #[serde(flatten)]
    pub prediction: Prediction,
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub text_column: String,
    pub label_column: String,
    pub train_count: usize,
    pub test_count: usize,
    pub train_classes: ClassCounts,
    pub metrics: BinaryMetrics,
    pub predictions: Vec<ExamplePrediction>,
}

// ─── PipelineUseCase ─────────────────────────────────────────────────────────
pub struct PipelineUseCase<S, C> {
    config: PipelineConfig,
    source: S,
    classifier: C,
}

impl<S: RecordSource, C: TextClassifier> PipelineUseCase<S, C> {
    pub fn new(config: PipelineConfig, source: S, classifier: C) -> Self {
        Self { config, source, classifier }
    }

    /// Execute the full pipeline end to end.
    pub fn execute(&self) -> Result<PipelineReport, PipelineError> {
        let cfg = &self.config;
        cfg.validate()?;

        // ── Step 2: Load and validate ────────────────────────────────────────
        let dataset = self.source.load_all()?;

        // ── Step 3: Split ────────────────────────────────────────────────────
        let (train, test) = self.classifier.split(dataset, cfg.test_fraction, cfg.seed);
        tracing::info!("Number of training samples: {}", train.len());
        tracing::info!("Number of testing samples: {}", test.len());
        if test.is_empty() {
            tracing::warn!("Test partition is empty; metrics will all be zero");
        }
        let train_classes = ClassCounts::of(&train);

        // ── Step 4: Fit ──────────────────────────────────────────────────────
        tracing::info!(
            "Fitting on {} records ({} spam, {} not spam)",
            train_classes.total(),
            train_classes.spam,
            train_classes.not_spam
        );
        let model = self.classifier.fit(&train)?;

        // ── Steps 5–6: Score the held-out records and evaluate ───────────────
        let scored = self.classifier.transform(&model, &test)?;
        let metrics = self.classifier.evaluate(&scored);
        tracing::info!(
            "Evaluation: accuracy={:.4} f1={:.4}",
            metrics.accuracy,
            metrics.f1_score
        );

        // ── Step 7: Example predictions ──────────────────────────────────────
        let predictions = cfg
            .examples
            .iter()
            .map(|text| {
                let prediction = self.classifier.predict_one(&model, text)?;
                tracing::debug!("'{}' → {} ({:.4})", text, prediction.label(), prediction.probability);
                Ok(ExamplePrediction {
                    text: text.clone(),
                    prediction,
                })
            })
            .collect::<Result<Vec<_>, PipelineError>>()?;

        Ok(PipelineReport {
            text_column: cfg.text_column.clone(),
            label_column: cfg.label_column.clone(),
            train_count: train.len(),
            test_count: test.len(),
            train_classes,
            metrics,
            predictions,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::InMemorySource;
    use crate::data::splitter::split_train_test;
    use crate::domain::error::{DatasetError, ErrorKind, ModelError};
    use crate::domain::prediction::ScoredRecord;
    use crate::domain::record::Record;
    use std::cell::RefCell;

    /// Labels a text spam when it contains "free"; records every call.
    #[derive(Default)]
    struct KeywordClassifier {
        calls: RefCell<Vec<&'static str>>,
    }

    impl KeywordClassifier {
        fn score(text: &str) -> Prediction {
            Prediction::from_probability(if text.to_lowercase().contains("free") { 0.9 } else { 0.1 })
        }
    }

    impl TextClassifier for KeywordClassifier {
        type Model = usize;

        fn split(&self, dataset: Vec<Record>, f: f64, seed: u64) -> (Vec<Record>, Vec<Record>) {
            self.calls.borrow_mut().push("split");
            split_train_test(dataset, f, seed)
        }

        fn fit(&self, train: &[Record]) -> Result<usize, ModelError> {
            self.calls.borrow_mut().push("fit");
            if train.is_empty() {
                return Err(ModelError::EmptyTrainingSet);
            }
            Ok(train.len())
        }

        fn transform(&self, _: &usize, data: &[Record]) -> Result<Vec<ScoredRecord>, ModelError> {
            self.calls.borrow_mut().push("transform");
            Ok(data
                .iter()
                .map(|r| ScoredRecord::new(r.clone(), Self::score(&r.text)))
                .collect())
        }

        fn predict_one(&self, _: &usize, text: &str) -> Result<Prediction, ModelError> {
            self.calls.borrow_mut().push("predict");
            Ok(Self::score(text))
        }
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn load_all(&self) -> Result<Vec<Record>, DatasetError> {
            Err(DatasetError::InvalidLabel {
                line: 4,
                value: "yes".to_string(),
            })
        }
    }

    fn dataset() -> Vec<Record> {
        (0..10)
            .flat_map(|i| {
                [
                    Record::new(format!("free prize {i}"), true),
                    Record::new(format!("lunch at {i}"), false),
                ]
            })
            .collect()
    }

    #[test]
    fn test_report_counts_and_predictions() {
        let use_case = PipelineUseCase::new(
            PipelineConfig::default(),
            InMemorySource::new(dataset()),
            KeywordClassifier::default(),
        );
        let report = use_case.execute().unwrap();

        assert_eq!(report.train_count, 16);
        assert_eq!(report.test_count, 4);
        assert_eq!(report.train_classes.total(), 16);
        assert!((report.metrics.accuracy - 1.0).abs() < 1e-9);

        assert_eq!(report.predictions.len(), 2);
        assert_eq!(report.predictions[0].text, "Buy one, get one free!");
        assert!(report.predictions[0].prediction.is_spam);
        assert!(!report.predictions[1].prediction.is_spam);
        assert_eq!(report.text_column, "Text");
        assert_eq!(report.label_column, "IsSpam");
    }

    #[test]
    fn test_steps_run_in_order() {
        let use_case = PipelineUseCase::new(
            PipelineConfig::default(),
            InMemorySource::new(dataset()),
            KeywordClassifier::default(),
        );
        use_case.execute().unwrap();
        let calls = use_case.classifier.calls.borrow();
        assert_eq!(
            calls.as_slice(),
            ["split", "fit", "transform", "predict", "predict"]
        );
    }

    #[test]
    fn test_same_seed_same_report() {
        let run = || {
            PipelineUseCase::new(
                PipelineConfig::default(),
                InMemorySource::new(dataset()),
                KeywordClassifier::default(),
            )
            .execute()
            .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_format_error_stops_before_training() {
        let use_case = PipelineUseCase::new(
            PipelineConfig::default(),
            FailingSource,
            KeywordClassifier::default(),
        );
        let err = use_case.execute().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(use_case.classifier.calls.borrow().is_empty());
    }

    #[test]
    fn test_empty_dataset_is_model_error() {
        let use_case = PipelineUseCase::new(
            PipelineConfig::default(),
            InMemorySource::new(Vec::new()),
            KeywordClassifier::default(),
        );
        let err = use_case.execute().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Model);
    }

    #[test]
    fn test_invalid_config_fails_before_loading() {
        let config = PipelineConfig {
            test_fraction: 1.0,
            ..PipelineConfig::default()
        };
        let use_case = PipelineUseCase::new(config, FailingSource, KeywordClassifier::default());
        assert_eq!(use_case.execute().unwrap_err().kind(), ErrorKind::Config);
    }

    #[test]
    fn test_config_validation() {
        assert!(PipelineConfig::default().validate().is_ok());

        let mut cfg = PipelineConfig::default();
        cfg.test_fraction = -0.1;
        assert!(cfg.validate().is_err());

        let mut cfg = PipelineConfig::default();
        cfg.trainer.batch_size = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = PipelineConfig::default();
        cfg.trainer.learning_rate = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_partial_json_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "seed": 7, "trainer": { "epochs": 3 } }"#).unwrap();

        let cfg = PipelineConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.trainer.epochs, 3);
        assert_eq!(cfg.trainer.batch_size, TrainerConfig::default().batch_size);
        assert_eq!(cfg.test_fraction, 0.2);
        assert_eq!(cfg.data_path, PathBuf::from("emails.csv"));
    }

    #[test]
    fn test_bad_json_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = PipelineConfig::from_json_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = PipelineConfig::from_json_file(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
