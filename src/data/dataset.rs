// ============================================================
// Layer 4 — Spam Dataset
// ============================================================
// Featurized training samples behind Burn's Dataset trait, so
// the DataLoader can shuffle them and hand mini-batches to the
// SpamBatcher.

use burn::data::dataset::Dataset;

/// Sparse TF-IDF features of one text: (feature index, weight),
/// sorted by index.
pub type SparseFeatures = Vec<(usize, f32)>;

/// One featurized training example.
#[derive(Debug, Clone, PartialEq)]
pub struct SpamSample {
    pub features: SparseFeatures,
    /// 1 = spam, 0 = not spam.
    pub label: i64,
}

impl SpamSample {
    pub fn new(features: SparseFeatures, label: i64) -> Self {
        Self { features, label }
    }
}

pub struct SpamDataset {
    samples: Vec<SpamSample>,
}

impl SpamDataset {
    pub fn new(samples: Vec<SpamSample>) -> Self { Self { samples } }
}

impl Dataset<SpamSample> for SpamDataset {
    fn get(&self, index: usize) -> Option<SpamSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
