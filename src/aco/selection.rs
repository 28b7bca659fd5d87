//! Roulette-wheel (fitness-proportionate) choice of the next node.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents", random proportional transition rule

use rand::Rng;

/// Outcome of one roulette draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Position in the candidate slice.
    pub index: usize,

    /// Whether the scores could not be sampled proportionally and a
    /// fallback rule picked the candidate instead.
    pub degenerate: bool,
}

/// Picks a candidate with probability proportional to its score.
///
/// A threshold `r` is drawn uniformly from `[0, total)` and candidates are
/// walked in slice order, accumulating their scores; the first candidate
/// whose running sum is `>= r` wins. Because of the `>=` a zero-score
/// candidate at the front can still be chosen when `r` is exactly 0.
///
/// Scores that cannot be sampled resolve as follows:
/// - NaN scores count as 0.
/// - If any score is `+inf`, the first such candidate is chosen.
/// - If the total is 0 or overflows, the pick is uniform.
///
/// # Panics
/// Panics if `scores` is empty.
pub fn roulette<R: Rng>(scores: &[f64], rng: &mut R) -> Choice {
    assert!(!scores.is_empty(), "cannot select from empty candidate set");

    if let Some(index) = scores.iter().position(|&s| s == f64::INFINITY) {
        return Choice {
            index,
            degenerate: true,
        };
    }

    let total: f64 = scores.iter().map(|&s| usable(s)).sum();
    if !(total > 0.0 && total.is_finite()) {
        return Choice {
            index: rng.random_range(0..scores.len()),
            degenerate: true,
        };
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (index, &s) in scores.iter().enumerate() {
        cumulative += usable(s);
        if cumulative >= threshold {
            return Choice {
                index,
                degenerate: false,
            };
        }
    }

    // floating-point fallback
    Choice {
        index: scores.len() - 1,
        degenerate: false,
    }
}

#[inline]
fn usable(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use rand::RngCore;

    /// Generator that always yields the same word.
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for (i, b) in dst.iter_mut().enumerate() {
                *b = self.0.to_le_bytes()[i % 8];
            }
        }
    }

    #[test]
    fn test_proportional_frequencies() {
        let scores = [1.0, 3.0, 6.0];
        let mut rng = create_rng(42);
        let mut counts = [0u32; 3];
        let n = 20000;
        for _ in 0..n {
            let choice = roulette(&scores, &mut rng);
            assert!(!choice.degenerate);
            counts[choice.index] += 1;
        }
        let share = |c: u32| c as f64 / n as f64;
        assert!((share(counts[0]) - 0.1).abs() < 0.02, "{counts:?}");
        assert!((share(counts[1]) - 0.3).abs() < 0.02, "{counts:?}");
        assert!((share(counts[2]) - 0.6).abs() < 0.02, "{counts:?}");
    }

    #[test]
    fn test_zero_threshold_picks_leading_zero_score() {
        // r == 0 and the first running sum is 0: `>=` selects it
        let mut rng = FixedRng(0);
        let choice = roulette(&[0.0, 1.0, 1.0], &mut rng);
        assert_eq!(choice.index, 0);
        assert!(!choice.degenerate);
    }

    #[test]
    fn test_high_threshold_reaches_last_candidate() {
        let mut rng = FixedRng(u64::MAX);
        let choice = roulette(&[1.0, 1.0, 1.0], &mut rng);
        assert_eq!(choice.index, 2);
    }

    #[test]
    fn test_single_candidate() {
        let mut rng = create_rng(1);
        assert_eq!(roulette(&[0.3], &mut rng).index, 0);
    }

    #[test]
    fn test_all_zero_scores_fall_back_to_uniform() {
        let scores = [0.0; 4];
        let mut rng = create_rng(7);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            let choice = roulette(&scores, &mut rng);
            assert!(choice.degenerate);
            counts[choice.index] += 1;
        }
        for &c in &counts {
            assert!(c > 700, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_infinite_score_wins_deterministically() {
        let mut rng = create_rng(3);
        let scores = [2.0, f64::INFINITY, 5.0, f64::INFINITY];
        for _ in 0..10 {
            let choice = roulette(&scores, &mut rng);
            assert_eq!(choice.index, 1);
            assert!(choice.degenerate);
        }
    }

    #[test]
    fn test_nan_scores_never_sampled() {
        let mut rng = create_rng(11);
        let scores = [f64::NAN, 1.0, f64::NAN];
        for _ in 0..100 {
            assert_eq!(roulette(&scores, &mut rng).index, 1);
        }
    }

    #[test]
    fn test_overflowing_total_is_degenerate() {
        let mut rng = create_rng(5);
        let choice = roulette(&[f64::MAX, f64::MAX], &mut rng);
        assert!(choice.degenerate);
        assert!(choice.index < 2);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty candidate set")]
    fn test_empty_panics() {
        let mut rng = create_rng(42);
        roulette(&[], &mut rng);
    }
}
