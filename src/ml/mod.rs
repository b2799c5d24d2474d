// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn and tokenizers code lives here. The rest of the crate
// only sees the TextClassifier trait from Layer 3.
//
//   featurizer.rs  — text → sparse TF-IDF vector
//                    (BertNormalizer + Whitespace pre-tokenizer,
//                    word n-grams, vocabulary fitted on train only)
//
//   model.rs       — two-class logistic regression
//                    (one Linear layer, softmax, cross-entropy)
//
//   trainer.rs     — mini-batch Adam training loop with
//                    per-epoch logging
//
//   inferencer.rs  — featurizer + trained model → Prediction

pub mod featurizer;
pub mod inferencer;
pub mod model;
pub mod trainer;

use crate::application::pipeline_use_case::TrainerConfig;
use crate::data::dataset::{SpamDataset, SpamSample};
use crate::data::splitter::split_train_test;
use crate::domain::error::ModelError;
use crate::domain::prediction::{Prediction, ScoredRecord};
use crate::domain::record::Record;
use crate::domain::traits::TextClassifier;
use crate::infra::metrics::MetricsLogger;

use featurizer::{Analyzer, TfIdfFeaturizer};
use inferencer::SpamPredictor;

/// TF-IDF features + logistic regression trained with Burn.
/// Implements the TextClassifier trait from Layer 3.
#[derive(Debug, Clone)]
pub struct BurnTextClassifier {
    config: TrainerConfig,
    seed: u64,
    metrics_logger: Option<MetricsLogger>,
}

impl BurnTextClassifier {
    pub fn new(config: TrainerConfig, seed: u64) -> Self {
        Self { config, seed, metrics_logger: None }
    }

    /// Also append per-epoch metrics to a CSV file.
    pub fn with_metrics_logger(mut self, logger: MetricsLogger) -> Self {
        self.metrics_logger = Some(logger);
        self
    }
}

impl TextClassifier for BurnTextClassifier {
    type Model = SpamPredictor;

    fn split(
        &self,
        dataset: Vec<Record>,
        test_fraction: f64,
        seed: u64,
    ) -> (Vec<Record>, Vec<Record>) {
        split_train_test(dataset, test_fraction, seed)
    }

    fn fit(&self, train: &[Record]) -> Result<SpamPredictor, ModelError> {
        if train.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let texts: Vec<&str> = train.iter().map(|r| r.text.as_str()).collect();
        let featurizer = TfIdfFeaturizer::fit(
            Analyzer::new(self.config.word_ngrams),
            &texts,
            self.config.max_vocab,
            self.config.min_df,
        )?;
        tracing::info!("Vocabulary: {} features", featurizer.num_features());

        let samples = train
            .iter()
            .map(|r| Ok(SpamSample::new(featurizer.transform(&r.text)?, r.class_index())))
            .collect::<Result<Vec<_>, ModelError>>()?;
        let dataset = SpamDataset::new(samples);

        let model = trainer::run_training(
            &self.config,
            self.seed,
            dataset,
            featurizer.num_features(),
            self.metrics_logger.as_ref(),
        )?;

        Ok(SpamPredictor::new(featurizer, model))
    }

    fn transform(
        &self,
        model: &SpamPredictor,
        data: &[Record],
    ) -> Result<Vec<ScoredRecord>, ModelError> {
        let texts: Vec<&str> = data.iter().map(|r| r.text.as_str()).collect();
        let predictions = model.predict_batch(&texts)?;
        Ok(data
            .iter()
            .cloned()
            .zip(predictions)
            .map(|(record, prediction)| ScoredRecord::new(record, prediction))
            .collect())
    }

    fn predict_one(&self, model: &SpamPredictor, text: &str) -> Result<Prediction, ModelError> {
        model.predict(text)
    }
}
