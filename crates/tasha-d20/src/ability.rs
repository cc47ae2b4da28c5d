//! The six abilities, their scores, and modifiers.

use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::D20Error;

/// Highest value an ability score can be raised to by bonuses.
pub const MAX_SCORE: i32 = 20;

/// One of the six abilities, in canonical sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum Ability {
    /// Physical might.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Health and stamina.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Ability {
    /// All six abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// The full ability name as printed on a character sheet.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ability {
    type Err = D20Error;

    /// Exact, case-sensitive match against the full ability name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| D20Error::UnknownAbility(s.to_string()))
    }
}

/// Ability modifier for a score: `floor((score - 10) / 2)`.
///
/// Uses floor division, so odd scores below 10 round down (9 gives -1).
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// A single ability score together with its derived modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct AbilityScore {
    /// The raw score.
    pub score: i32,
    /// Always `modifier(score)`.
    pub modifier: i32,
}

impl AbilityScore {
    /// Build a score and derive its modifier.
    pub fn new(score: i32) -> Self {
        Self {
            score,
            modifier: modifier(score),
        }
    }
}

impl Default for AbilityScore {
    fn default() -> Self {
        Self::new(10)
    }
}

/// The full set of six ability scores for one character.
///
/// Every ability always has a value (10 until assigned). Scores are only
/// ever overwritten or increased, and the modifier is recomputed on every
/// change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilityScores {
    scores: [AbilityScore; 6],
}

impl AbilityScores {
    /// Create a set with every ability at 10.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from scores given in sheet order (Strength first).
    pub fn from_array(values: [i32; 6]) -> Self {
        let mut set = Self::new();
        for (ability, value) in Ability::ALL.into_iter().zip(values) {
            set.set(ability, value);
        }
        set
    }

    /// The score and modifier for an ability.
    pub fn get(&self, ability: Ability) -> AbilityScore {
        self.scores[ability.index()]
    }

    /// The raw score for an ability.
    pub fn score(&self, ability: Ability) -> i32 {
        self.get(ability).score
    }

    /// The modifier for an ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.get(ability).modifier
    }

    /// Overwrite an ability's score.
    pub fn set(&mut self, ability: Ability, score: i32) {
        self.scores[ability.index()] = AbilityScore::new(score);
    }

    /// Add a bonus to an ability, never exceeding [`MAX_SCORE`].
    ///
    /// Returns the new score.
    pub fn increase(&mut self, ability: Ability, bonus: i32) -> i32 {
        let current = self.score(ability);
        let raised = (current + bonus).min(MAX_SCORE.max(current));
        self.set(ability, raised);
        raised
    }

    /// Whether the ability can take the full bonus without passing the cap.
    pub fn can_increase(&self, ability: Ability, bonus: i32) -> bool {
        self.score(ability) + bonus <= MAX_SCORE
    }

    /// Iterate over all six abilities in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, AbilityScore)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

impl Serialize for AbilityScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Ability::ALL.len()))?;
        for (ability, score) in self.iter() {
            map.serialize_entry(ability.name(), &score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn modifier_table() {
        assert_eq!(modifier(1), -5);
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(15), 2);
        assert_eq!(modifier(20), 5);
    }

    #[test]
    fn modifier_rounds_down_for_negative_values() {
        assert_eq!(modifier(7), -2);
        assert_eq!(modifier(0), -5);
        assert_eq!(modifier(-1), -6);
    }

    proptest! {
        #[test]
        fn modifier_is_floor_division(score in -100i32..200) {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            prop_assert_eq!(modifier(score), expected);
        }
    }

    #[test]
    fn ability_round_trips_through_name() {
        for ability in Ability::ALL {
            assert_eq!(ability.name().parse::<Ability>().unwrap(), ability);
        }
    }

    #[test]
    fn ability_parse_is_case_sensitive() {
        assert!("strength".parse::<Ability>().is_err());
        assert!("Str".parse::<Ability>().is_err());
    }

    #[test]
    fn set_recomputes_modifier() {
        let mut scores = AbilityScores::new();
        scores.set(Ability::Wisdom, 15);
        assert_eq!(scores.get(Ability::Wisdom), AbilityScore { score: 15, modifier: 2 });
        scores.set(Ability::Wisdom, 9);
        assert_eq!(scores.modifier(Ability::Wisdom), -1);
    }

    #[test]
    fn increase_caps_at_twenty() {
        let mut scores = AbilityScores::from_array([19, 10, 10, 10, 10, 10]);
        assert_eq!(scores.increase(Ability::Strength, 2), 20);
        assert_eq!(scores.modifier(Ability::Strength), 5);
        assert!(!scores.can_increase(Ability::Strength, 1));
        assert!(scores.can_increase(Ability::Dexterity, 2));
    }

    #[test]
    fn from_array_uses_sheet_order() {
        let scores = AbilityScores::from_array([15, 14, 13, 12, 10, 8]);
        assert_eq!(scores.score(Ability::Strength), 15);
        assert_eq!(scores.score(Ability::Charisma), 8);
        let order: Vec<Ability> = scores.iter().map(|(a, _)| a).collect();
        assert_eq!(order, Ability::ALL.to_vec());
    }
}
