// ============================================================
// Layer 6 — Training Metrics Logger
// ============================================================
// Appends one row per training epoch to a CSV file so learning
// curves can be plotted after the run.
//
// Columns:
//   epoch:       the epoch number (1, 2, 3, ...)
//   train_loss:  mean cross-entropy over the epoch's batches
//   train_acc:   fraction of training samples classified correctly
//
// Example:
//   epoch,train_loss,train_acc
//   1,0.693147,0.512000
//   2,0.402311,0.941000
//
// The header is written only when the file is new, so repeated
// runs append to the same log.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};
use serde::{Deserialize, Serialize};

pub const CSV_HEADER: &str = "epoch,train_loss,train_acc";

/// One row of metrics for a single training epoch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    pub epoch: usize,
    pub train_loss: f64,
    pub train_acc: f64,
}

impl EpochMetrics {
    pub fn new(epoch: usize, train_loss: f64, train_acc: f64) -> Self {
        Self { epoch, train_loss, train_acc }
    }
}

/// Logs epoch metrics to a CSV file.
#[derive(Debug, Clone)]
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create the logger, its parent directory, and the header row
    /// if the file does not exist yet.
    pub fn new(csv_path: impl Into<PathBuf>) -> io::Result<Self> {
        let csv_path = csv_path.into();

        if let Some(dir) = csv_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "{CSV_HEADER}")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one epoch's metrics as a new row.
    pub fn log(&self, m: &EpochMetrics) -> io::Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;
        writeln!(f, "{},{:.6},{:.6}", m.epoch, m.train_loss, m.train_acc)?;
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
