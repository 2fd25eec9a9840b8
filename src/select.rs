//! Score-weighted stochastic selection.
//!
//! The selector converts a raw acquisition score vector into a
//! probability distribution by shifting the minimum to zero and
//! renormalizing, then draws exactly one candidate index from it. A
//! weighted draw rather than an argmax is what turns acquisition values
//! into exploration: every candidate with above-minimum value keeps a
//! proportional chance of being chosen. A softmax is deliberately not
//! used; the distribution is a linear renormalization of the shifted raw
//! scores.

/// Converts raw scores into a probability distribution.
///
/// The minimum score is shifted to zero (preserving relative ordering),
/// then entries are divided by their sum. When every score is equal the
/// shifted sum is zero and the distribution is uniform; that degenerate
/// case is handled here, never surfaced as an error.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn normalized_weights(scores: &[f64]) -> Vec<f64> {
    debug_assert!(!scores.is_empty());
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let shifted: Vec<f64> = scores.iter().map(|&s| s - min).collect();
    let total: f64 = shifted.iter().sum();
    if total <= 0.0 {
        return vec![1.0 / scores.len() as f64; scores.len()];
    }
    shifted.iter().map(|&s| s / total).collect()
}

/// Draws one index from `weights` by inverting the cumulative
/// distribution on a single uniform draw.
pub(crate) fn weighted_index(weights: &[f64], rng: &mut fastrand::Rng) -> usize {
    let u = rng.f64();
    let mut acc = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        acc += weight;
        if u < acc {
            return index;
        }
    }
    // Floating-point slack can leave the cumulative sum a hair below 1.
    weights.len() - 1
}

/// Selects one candidate index with probability proportional to its
/// shifted score.
pub(crate) fn select(scores: &[f64], rng: &mut fastrand::Rng) -> usize {
    weighted_index(&normalized_weights(scores), rng)
}

#[cfg(test)]
#[allow(clippy::cast_precision_loss)]
mod tests {
    use super::*;

    fn assert_is_distribution(weights: &[f64]) {
        assert!(weights.iter().all(|&w| w >= 0.0), "negative weight");
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
    }

    #[test]
    fn weights_match_worked_example() {
        let weights = normalized_weights(&[0.1, 0.5, 0.5, 0.9]);
        let expected = [0.0, 0.25, 0.25, 0.5];
        for (w, e) in weights.iter().zip(&expected) {
            assert!((w - e).abs() < 1e-12, "got {weights:?}");
        }
        assert_is_distribution(&weights);
    }

    #[test]
    fn all_negative_scores_form_a_distribution() {
        let weights = normalized_weights(&[-3.0, -1.0, -2.0]);
        assert_is_distribution(&weights);
        // -1.0 carries the largest shifted mass.
        assert!(weights[1] > weights[0]);
        assert!(weights[1] > weights[2]);
    }

    #[test]
    fn equal_scores_become_uniform() {
        for scores in [vec![1.0; 5], vec![0.0; 3], vec![-7.5; 4]] {
            let weights = normalized_weights(&scores);
            assert_is_distribution(&weights);
            for &w in &weights {
                assert!((w - 1.0 / scores.len() as f64).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let mut rng = fastrand::Rng::with_seed(0);
        for _ in 0..10 {
            assert_eq!(select(&[42.0], &mut rng), 0);
        }
    }

    #[test]
    fn zero_weight_candidates_are_never_drawn() {
        // Index 0 has weight exactly 0 after shifting.
        let scores = [0.1, 0.5, 0.5, 0.9];
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..500 {
            assert_ne!(select(&scores, &mut rng), 0);
        }
    }

    #[test]
    fn draw_is_reproducible_per_seed() {
        let scores = [0.1, 0.5, 0.5, 0.9];
        let mut rng_a = fastrand::Rng::with_seed(99);
        let mut rng_b = fastrand::Rng::with_seed(99);
        for _ in 0..20 {
            assert_eq!(select(&scores, &mut rng_a), select(&scores, &mut rng_b));
        }
    }

    #[test]
    fn draw_frequencies_track_weights() {
        let scores = [0.0, 1.0, 3.0];
        let mut rng = fastrand::Rng::with_seed(1);
        let mut counts = [0u32; 3];
        let n = 8000;
        for _ in 0..n {
            counts[select(&scores, &mut rng)] += 1;
        }
        // Expected weights are [0, 0.25, 0.75].
        assert_eq!(counts[0], 0);
        let f1 = f64::from(counts[1]) / f64::from(n);
        assert!((f1 - 0.25).abs() < 0.03, "frequency {f1}");
    }

    #[test]
    fn weighted_index_survives_rounding_slack() {
        // Weights summing just shy of 1 still return a valid index.
        let weights = [0.3, 0.3, 0.399_999_999];
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..100 {
            assert!(weighted_index(&weights, &mut rng) < 3);
        }
    }
}
