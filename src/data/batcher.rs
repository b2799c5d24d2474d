// ============================================================
// Layer 4 — Spam Batcher
// ============================================================
// Implements Burn's Batcher trait to turn a Vec<SpamSample>
// into dense tensors for the model forward pass.
//
// What is a Batcher?
//   The DataLoader picks which samples go into each mini-batch;
//   the Batcher stacks those samples into one tensor so the
//   model processes them together.
//
// How batching works here:
//   Input:  N SpamSamples, each a sparse list of (index, weight)
//   Output: SpamBatch with features [N, num_features] and
//           labels [N]
//
//   Features are scattered into one flat row-major Vec, then
//   reshaped: [s1_f1 .. s1_fD, s2_f1 .. sN_fD] → [N, D]
//
// Why densify here and not in the dataset?
//   A vocabulary of a few thousand terms times every email would
//   be mostly zeros. Samples stay sparse in memory and only the
//   current mini-batch is expanded.

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
    tensor::TensorData,
};

use crate::data::dataset::SpamSample;

// ─── SpamBatch ────────────────────────────────────────────────────────────────
/// A batch ready for the forward pass.
#[derive(Debug, Clone)]
pub struct SpamBatch<B: Backend> {
    /// TF-IDF features, shape [batch_size, num_features]
    pub features: Tensor<B, 2>,

    /// Class indices, shape [batch_size]
    pub labels: Tensor<B, 1, Int>,
}

// ─── SpamBatcher ──────────────────────────────────────────────────────────────
/// Knows the feature width, so every batch has the same shape.
#[derive(Clone, Debug)]
pub struct SpamBatcher {
    pub num_features: usize,
}

impl SpamBatcher {
    pub fn new(num_features: usize) -> Self {
        Self { num_features }
    }

    /// Densify sparse rows into a [rows, num_features] tensor.
    /// Indices at or beyond `num_features` are ignored.
    pub fn dense_features<B: Backend>(
        &self,
        rows: &[&[(usize, f32)]],
        device: &B::Device,
    ) -> Tensor<B, 2> {
        let width = self.num_features;
        let mut flat = vec![0.0f32; rows.len() * width];

        for (row, features) in rows.iter().enumerate() {
            for &(col, weight) in features.iter().filter(|(col, _)| *col < width) {
                flat[row * width + col] = weight;
            }
        }

        Tensor::<B, 2>::from_data(TensorData::new(flat, [rows.len(), width]), device)
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// This is what makes SpamBatcher work with Burn's DataLoader.
// The DataLoader calls .batch(items, device) with each mini-batch.
impl<B: Backend> Batcher<B, SpamSample, SpamBatch<B>> for SpamBatcher {
    fn batch(&self, items: Vec<SpamSample>, device: &B::Device) -> SpamBatch<B> {
        let rows: Vec<&[(usize, f32)]> = items.iter().map(|s| s.features.as_slice()).collect();
        let features = self.dense_features::<B>(&rows, device);

        let labels: Vec<i64> = items.iter().map(|s| s.label).collect();
        let labels = Tensor::<B, 1, Int>::from_data(
            TensorData::new(labels, [items.len()]),
            device,
        );

        SpamBatch { features, labels }
    }
}
