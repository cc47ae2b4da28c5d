//! Ability score generation: best three of 4d6, six times, reroll until
//! the set is playable.

use rand::rngs::StdRng;

use crate::dice::{Die, RollResult};

/// Number of scores in a generated set.
pub const SCORE_COUNT: usize = 6;
/// Every score in an accepted set must be at least this.
pub const MIN_ACCEPTED: u32 = 8;
/// At least one score in an accepted set must reach this.
pub const PEAK_REQUIRED: u32 = 15;

/// An accepted set of generated scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScores {
    /// The six scores, highest first.
    pub scores: Vec<i32>,
    /// How many full sets were rolled before one was accepted (at least 1).
    pub attempts: u32,
}

/// Sum of the best three dice out of a four-die roll.
pub fn best_three(roll: &RollResult) -> u32 {
    roll.drop_lowest().total()
}

/// Roll a single ability score: 4d6, drop the lowest.
pub fn roll_score(rng: &mut StdRng) -> u32 {
    best_three(&Die::D6.roll_many(4, rng))
}

/// Whether a set of six sums passes the reroll policy.
pub fn is_acceptable(sums: &[u32]) -> bool {
    let min = sums.iter().copied().min().unwrap_or(0);
    let max = sums.iter().copied().max().unwrap_or(0);
    sums.len() == SCORE_COUNT && min >= MIN_ACCEPTED && max >= PEAK_REQUIRED
}

/// Generate six ability scores, sorted highest first.
///
/// Whole sets are rerolled until the lowest score is at least 8 and the
/// highest is at least 15. There is no attempt cap; an acceptable set comes
/// up within a handful of tries on average.
pub fn generate_scores(rng: &mut StdRng) -> GeneratedScores {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let sums: Vec<u32> = (0..SCORE_COUNT).map(|_| roll_score(rng)).collect();
        if is_acceptable(&sums) {
            let mut scores: Vec<i32> = sums.into_iter().map(|s| s as i32).collect();
            scores.sort_unstable_by(|a, b| b.cmp(a));
            return GeneratedScores { scores, attempts };
        }
    }
}
