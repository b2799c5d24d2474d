// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Mini-batch training of the logistic-regression model with
// Burn's DataLoader and Adam.
//
// Backends:
//   - Training uses TrainBackend (Autodiff<NdArray>) for gradients
//   - model.valid() returns the model on NdArray for inference
//   - argmax(1) returns [batch,1] so we flatten before .equal()
//
// The DataLoader shuffles with an RNG seeded from the run seed
// and draws a fresh order every epoch, so a run is reproducible
// end to end for a given seed.
//
// Why weight decay?
//   With one weight per vocabulary term, a rare word seen only in
//   spam can get an arbitrarily large weight. A small L2 penalty
//   keeps every weight close to zero unless many texts agree.

use std::sync::Arc;

use burn::{
    backend::{Autodiff, NdArray},
    data::{
        dataloader::{DataLoader, DataLoaderBuilder},
        dataset::Dataset,
    },
    module::AutodiffModule,
    optim::{decay::WeightDecayConfig, AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::pipeline_use_case::TrainerConfig;
use crate::data::{
    batcher::{SpamBatch, SpamBatcher},
    dataset::SpamDataset,
};
use crate::domain::error::ModelError;
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::model::{SpamModel, SpamModelConfig};

pub type TrainBackend = Autodiff<NdArray>;
pub type InferBackend = NdArray;

/// Train a fresh model on `dataset` and return it on the inference backend.
pub fn run_training(
    cfg:          &TrainerConfig,
    seed:         u64,
    dataset:      SpamDataset,
    num_features: usize,
    logger:       Option<&MetricsLogger>,
) -> Result<SpamModel<InferBackend>, ModelError> {
    if dataset.is_empty() {
        return Err(ModelError::EmptyTrainingSet);
    }

    let device = Default::default();

    // ── Build model ───────────────────────────────────────────────────────────
    let mut model: SpamModel<TrainBackend> = SpamModelConfig::new(num_features).init(&device);
    tracing::debug!("Model ready: {} features → 2 classes", num_features);

    // ── Adam optimiser, L2 as weight decay ────────────────────────────────────
    let weight_decay = (cfg.l2_penalty > 0.0).then(|| WeightDecayConfig::new(cfg.l2_penalty));
    let mut optim = AdamConfig::new()
        .with_epsilon(1e-8)
        .with_weight_decay(weight_decay)
        .init();

    let sample_count = dataset.len();

    // ── Training data loader (AutodiffBackend) ────────────────────────────────
    let train_loader: Arc<dyn DataLoader<TrainBackend, SpamBatch<TrainBackend>>> =
        DataLoaderBuilder::new(SpamBatcher::new(num_features))
            .batch_size(cfg.batch_size)
            .shuffle(seed)
            .build(dataset);
    tracing::debug!("Training on {} samples, batch size {}", sample_count, cfg.batch_size);

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {
        let mut loss_sum = 0.0f64;
        let mut batches  = 0usize;
        let mut correct  = 0usize;
        let mut seen     = 0usize;

        for batch in train_loader.iter() {
            let batch_len = batch.labels.dims()[0];
            let (loss, logits) = model.forward_loss(batch.features, batch.labels.clone());

            loss_sum += loss.clone().into_scalar().elem::<f64>();
            batches  += 1;

            // argmax(1) → [batch, 1]; flatten to [batch] to compare with labels
            let hits: i64 = logits
                .argmax(1)
                .flatten::<1>(0, 1)
                .equal(batch.labels)
                .int()
                .sum()
                .into_scalar()
                .elem::<i64>();
            correct += hits as usize;
            seen    += batch_len;

            // Backward pass + Adam update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.learning_rate, model, grads);
        }

        let avg_loss = if batches > 0 { loss_sum / batches as f64 } else { f64::NAN };
        let accuracy = if seen > 0 { correct as f64 / seen as f64 } else { 0.0 };

        tracing::info!(
            "Epoch {:>3}/{} | train_loss={:.4} | train_acc={:.1}%",
            epoch, cfg.epochs, avg_loss, accuracy * 100.0,
        );

        if let Some(logger) = logger {
            if let Err(e) = logger.log(&EpochMetrics::new(epoch, avg_loss, accuracy)) {
                tracing::warn!(
                    "Could not write epoch {} to '{}': {}",
                    epoch,
                    logger.csv_path().display(),
                    e
                );
            }
        }
    }

    tracing::debug!("Training complete");
    Ok(model.valid())
}
