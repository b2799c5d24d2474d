// ============================================================
// Layer 5 — Inferencer
// ============================================================
// A fitted featurizer plus a trained model: text in, spam
// probability out. Texts are scored in chunks so a large test
// partition never becomes one huge dense tensor.

use burn::prelude::Backend;

use crate::data::batcher::SpamBatcher;
use crate::domain::error::ModelError;
use crate::domain::prediction::Prediction;
use crate::ml::featurizer::TfIdfFeaturizer;
use crate::ml::model::SpamModel;
use crate::ml::trainer::InferBackend;

const PREDICT_CHUNK: usize = 256;

#[derive(Debug)]
pub struct SpamPredictor {
    featurizer: TfIdfFeaturizer,
    model:      SpamModel<InferBackend>,
    batcher:    SpamBatcher,
    device:     <InferBackend as Backend>::Device,
}

impl SpamPredictor {
    pub fn new(featurizer: TfIdfFeaturizer, model: SpamModel<InferBackend>) -> Self {
        let batcher = SpamBatcher::new(featurizer.num_features());
        Self { featurizer, model, batcher, device: Default::default() }
    }

    pub fn predict(&self, text: &str) -> Result<Prediction, ModelError> {
        let mut predictions = self.predict_batch(&[text])?;
        predictions.pop().ok_or_else(|| {
            ModelError::Tensor("model returned no probability".to_string())
        })
    }

    /// One prediction per input text, in input order.
    pub fn predict_batch(&self, texts: &[&str]) -> Result<Vec<Prediction>, ModelError> {
        let mut predictions = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(PREDICT_CHUNK) {
            let rows = chunk
                .iter()
                .map(|text| self.featurizer.transform(text))
                .collect::<Result<Vec<_>, _>>()?;

            let rows: Vec<&[(usize, f32)]> = rows.iter().map(Vec::as_slice).collect();
            let features = self.batcher.dense_features::<InferBackend>(&rows, &self.device);

            let probs = self
                .model
                .spam_probability(features)
                .into_data()
                .to_vec::<f32>()
                .map_err(|e| ModelError::Tensor(format!("{e:?}")))?;

            predictions.extend(probs.into_iter().map(Prediction::from_probability));
        }

        tracing::debug!("Scored {} texts", predictions.len());
        Ok(predictions)
    }
}
