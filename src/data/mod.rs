// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the CSV file on disk and tensor batches:
//
//   emails.csv
//       │
//       ▼
//   CsvLoader         → reads the file in one call
//       │
//       ▼
//   csv_line          → quote-aware split + label validation → Record
//       │
//       ▼
//   splitter          → seeded train/test partition
//       │
//       ▼
//   SpamDataset       → featurized samples behind Burn's Dataset trait
//       │
//       ▼
//   SpamBatcher       → dense tensor batches for the model

/// Parses and validates single CSV lines
pub mod csv_line;

/// Reads a CSV file into records
pub mod loader;

/// Seeded train/test split
pub mod splitter;

/// Implements Burn's Dataset trait for featurized samples
pub mod dataset;

/// Builds tensor batches and per-epoch batch plans
pub mod batcher;
