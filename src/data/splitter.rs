// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles samples with a seeded RNG and holds out a fraction
// of them for evaluation:
//   - Training set: used to fit the model
//   - Test set:     used to compute the reported metrics
//
// Why hold out a test set?
//   Scoring the model on the emails it was trained on says
//   nothing about new mail; it could simply have memorised
//   them. The held-out records are never seen during training,
//   so the metrics estimate how it does on unseen messages.
//
// Why a seeded shuffle?
//   Labelled exports are often sorted (all spam first, or by
//   date). Shuffling mixes both classes into each partition.
//   Seeding the RNG (ChaCha8, same output on every platform)
//   makes the partition, and therefore the reported metrics,
//   identical from one run to the next.
//
// Test size = round(total * test_fraction), clamped to total.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Shuffle `samples` and split into (train, test).
///
/// # Arguments
/// * `samples`       - All available samples (consumed by this function)
/// * `test_fraction` - Proportion held out for testing, e.g. 0.2 = 20%
/// * `seed`          - RNG seed
pub fn split_train_test<T>(mut samples: Vec<T>, test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let total = samples.len();
    let test_len = ((total as f64) * test_fraction).round() as usize;
    let test_len = test_len.min(total);

    // After this: samples = test [0..test_len], train = [test_len..total]
    let train = samples.split_off(test_len);

    tracing::debug!(
        "Dataset split: {} training, {} testing (seed {})",
        train.len(),
        samples.len(),
        seed,
    );

    (train, samples)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test) = split_train_test(items, 0.2, 0);
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(), 20);
    }

    #[test]
    fn test_all_items_preserved() {
        let items: Vec<usize> = (0..50).collect();
        let (train, test) = split_train_test(items, 0.3, 7);
        let mut all: Vec<usize> = train.into_iter().chain(test).collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let items: Vec<usize> = (0..40).collect();
        let a = split_train_test(items.clone(), 0.2, 0);
        let b = split_train_test(items, 0.2, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_split() {
        let items: Vec<usize> = (0..100).collect();
        let (_, a) = split_train_test(items.clone(), 0.2, 0);
        let (_, b) = split_train_test(items, 0.2, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, test) = split_train_test(items, 0.2, 0);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn test_zero_fraction_keeps_everything_for_training() {
        let items: Vec<usize> = (0..10).collect();
        let (train, test) = split_train_test(items, 0.0, 0);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());
    }

    #[test]
    fn test_rounding_of_small_sets() {
        // 7 * 0.2 = 1.4 → 1 held out
        let (train, test) = split_train_test((0..7).collect::<Vec<u8>>(), 0.2, 0);
        assert_eq!((train.len(), test.len()), (6, 1));
    }
}
