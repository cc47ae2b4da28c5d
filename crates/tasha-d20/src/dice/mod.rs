//! Polyhedral dice and rolling.
//!
//! Dice show up twice in character creation: the d6 pool behind ability
//! score generation, and the hit die each class grants.

pub mod roll;

pub use roll::RollResult;

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }

    /// Roll this die once.
    pub fn roll(self, rng: &mut StdRng) -> u32 {
        rng.random_range(1..=self.sides())
    }

    /// Roll `count` of this die and collect the individual values.
    pub fn roll_many(self, count: u32, rng: &mut StdRng) -> RollResult {
        RollResult {
            values: (0..count).map(|_| self.roll(rng)).collect(),
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D12.sides(), 12);
        assert_eq!(Die::D20.sides(), 20);
    }

    #[test]
    fn die_display() {
        assert_eq!(Die::D12.to_string(), "d12");
        assert_eq!(Die::D6.to_string(), "d6");
    }

    #[test]
    fn roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = Die::D6.roll_many(200, &mut rng);
        assert_eq!(result.count(), 200);
        assert!(result.values.iter().all(|v| (1..=6).contains(v)));
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let r1 = Die::D20.roll_many(5, &mut rng1);
        let r2 = Die::D20.roll_many(5, &mut rng2);
        assert_eq!(r1.values, r2.values);
    }
}
