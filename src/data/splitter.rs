// ============================================================
// Layer 4 — Train/Dev Splitter
// ============================================================
// Randomly shuffles examples and splits them into two sets:
//   - Training set: used to fit a downstream model
//   - Dev set:      used to measure generalisation
//
// Why shuffle before splitting?
//   Corpus files are grouped by label (all negatives before
//   all positives). Without shuffling, the dev set would
//   contain only one class. Shuffling gives both sets a
//   representative mix.
//
// The dev size is computed by direct arithmetic,
//   dev_len = round(dev_ratio * N)  clamped to [0, N]
// so dev_ratio = 0 gives an empty dev set and a full train
// set, with no end-relative index tricks involved.
//
// The RNG is an explicit parameter rather than a process-wide
// source, so a fixed seed reproduces the same split.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom,
// the standard unbiased shuffle algorithm.
//
// Reference: rand crate documentation
//            Rust Book §8 (Vectors)

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::domain::example::Example;

/// Shuffle `examples` (unless disabled) and split into
/// (train, dev) by `dev_ratio`.
///
/// # Arguments
/// * `examples`  - All examples (consumed by this function)
/// * `dev_ratio` - Proportion for dev, e.g. 0.1 = 10%
/// * `shuffle`   - Whether to permute before cutting
/// * `rng`       - Seeded generator driving the shuffle
///
/// # Returns
/// A tuple (train_examples, dev_examples) that partitions the
/// input: no example is lost or duplicated.
pub fn split_examples(
    mut examples: Vec<Example>,
    dev_ratio: f64,
    shuffle: bool,
    rng: &mut StdRng,
) -> (Vec<Example>, Vec<Example>) {
    if shuffle {
        examples.shuffle(rng);
    }

    let total   = examples.len();
    let dev_len = ((total as f64) * dev_ratio).round() as usize;
    // Clamp so ratios near or above 1.0 can't panic on tiny sets
    let dev_len = dev_len.min(total);

    // split_off(n) removes elements [n..] and returns them:
    // after this, examples = train half, dev = tail half.
    let dev = examples.split_off(total - dev_len);

    tracing::debug!(
        "Dataset split: {} train, {} dev (ratio {})",
        examples.len(),
        dev.len(),
        dev_ratio,
    );

    (examples, dev)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn numbered(n: usize) -> Vec<Example> {
        (0..n).map(|i| Example::new(format!("t{i}"), "l")).collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_partition_no_loss_no_overlap() {
        // Sizes and ratios spanning empty, single, and large sets
        for n in [0usize, 1, 10, 999] {
            for ratio in [0.0, 0.1, 0.5, 0.99] {
                let (train, dev) = split_examples(numbered(n), ratio, true, &mut rng());
                assert_eq!(train.len() + dev.len(), n, "n={n} ratio={ratio}");

                let seen: HashSet<&str> = train
                    .iter()
                    .chain(dev.iter())
                    .map(|e| e.text.as_str())
                    .collect();
                assert_eq!(seen.len(), n, "n={n} ratio={ratio}");
            }
        }
    }

    #[test]
    fn test_zero_ratio_gives_full_train_empty_dev() {
        let (train, dev) = split_examples(numbered(10), 0.0, true, &mut rng());
        assert_eq!(train.len(), 10);
        assert!(dev.is_empty());
    }

    #[test]
    fn test_ratio_near_one_over_n() {
        // 0.1 * 10 rounds to exactly one dev example
        let (train, dev) = split_examples(numbered(10), 0.1, true, &mut rng());
        assert_eq!(train.len(), 9);
        assert_eq!(dev.len(), 1);

        // Just under half of 10 rounds away from zero to 5
        let (train, dev) = split_examples(numbered(10), 0.45, true, &mut rng());
        assert_eq!(train.len(), 5);
        assert_eq!(dev.len(), 5);
    }

    #[test]
    fn test_full_dev_split_clamped() {
        // A ratio that rounds past N must not panic
        let (train, dev) = split_examples(numbered(3), 0.99, true, &mut rng());
        assert_eq!(train.len() + dev.len(), 3);
        assert_eq!(dev.len(), 3);
        assert!(train.is_empty());
    }

    #[test]
    fn test_no_shuffle_preserves_order() {
        let (train, dev) = split_examples(numbered(5), 0.4, false, &mut rng());
        let texts: Vec<&str> = train
            .iter()
            .chain(dev.iter())
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(texts, vec!["t0", "t1", "t2", "t3", "t4"]);
    }

    #[test]
    fn test_same_seed_same_split() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let (train_a, dev_a) = split_examples(numbered(50), 0.3, true, &mut a);
        let (train_b, dev_b) = split_examples(numbered(50), 0.3, true, &mut b);
        assert_eq!(train_a, train_b);
        assert_eq!(dev_a, dev_b);
    }

    #[test]
    fn test_empty_input() {
        let (train, dev) = split_examples(Vec::new(), 0.5, true, &mut rng());
        assert!(train.is_empty());
        assert!(dev.is_empty());
    }
}
