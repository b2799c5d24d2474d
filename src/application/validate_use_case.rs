// ============================================================
// Layer 2 — ValidateUseCase
// ============================================================
// Loads and validates a dataset without training anything.
// Fails on the first malformed line exactly like a full run.

use serde::{Deserialize, Serialize};

use crate::domain::error::DatasetError;
use crate::domain::record::ClassCounts;
use crate::domain::traits::RecordSource;

/// What a successful validation found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub classes: ClassCounts,
    /// Records whose text is empty after quote stripping.
    pub empty_texts: usize,
}

pub struct ValidateUseCase<S> {
    source: S,
}

impl<S: RecordSource> ValidateUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> Result<DatasetSummary, DatasetError> {
        let records = self.source.load_all().inspect_err(|e| {
            if let Some(line) = e.line() {
                tracing::warn!("Validation stopped at line {}", line);
            }
        })?;
        let summary = DatasetSummary {
            records: records.len(),
            classes: ClassCounts::of(&records),
            empty_texts: records.iter().filter(|r| r.text.is_empty()).count(),
        };
        tracing::info!("Dataset is valid: {} records", summary.records);
        Ok(summary)
    }
}
