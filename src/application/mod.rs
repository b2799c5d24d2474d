// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal:
//
//   pipeline_use_case — load, split, train, evaluate, predict
//   validate_use_case — load and validate the dataset only
//
// Rules for this layer:
//   - No ML math or model code here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination

// The full train/evaluate/predict workflow
pub mod pipeline_use_case;

// Dataset validation without training
pub mod validate_use_case;
