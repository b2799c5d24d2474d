// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that name the core
// concepts of the classifier:
//
//   record.rs     — one labelled email read from the CSV file
//   prediction.rs — a model verdict and a scored test record
//   metrics.rs    — binary-classification metrics over scored records
//   error.rs      — typed error kinds (format, I/O, model, config)
//   traits.rs     — RecordSource and the TextClassifier capability
//
// Rules for this layer:
//   - NO Burn or tokenizers types
//   - NO file I/O
//   - Only data and the contracts other layers implement

pub mod error;
pub mod metrics;
pub mod prediction;
pub mod record;
pub mod traits;
