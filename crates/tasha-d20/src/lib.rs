//! d20 rules engine for tasha.
//!
//! Holds the 2024 ("5.5e") reference tables for species, backgrounds,
//! classes, multiclassing and feats, the ability score model, and the
//! dice used to roll a fresh set of ability scores.

pub mod ability;
pub mod dice;
pub mod error;
pub mod generator;
pub mod rules;

pub use ability::{Ability, AbilityScore, AbilityScores, modifier};
pub use dice::{Die, RollResult};
pub use error::{D20Error, D20Result};
pub use generator::{GeneratedScores, generate_scores};
pub use rules::{
    Background, ClassDefinition, Feat, FeatCategory, FeatContext, MulticlassRequirement, Policy,
    Ruleset, Skill, Species,
};
