// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to one business layer:
//
//   metrics.rs — per-epoch training log written to a CSV file
//                (epoch, mean loss, training accuracy)

/// Training metrics CSV logger
pub mod metrics;
