//! Rules tables and the lookups the character wizard runs against them.
//!
//! A [`Ruleset`] bundles one revision of the reference data. Every lookup is
//! keyed by the exact, case-sensitive name shown in the menus. Unknown names
//! yield an empty collection (or `None`) instead of an error, so a class that
//! grants no tools and a class that does not exist look the same to callers.

pub mod backgrounds;
pub mod classes;
pub mod feats;
pub mod multiclass;
pub mod skills;
pub mod species;
pub mod tools;

use std::collections::BTreeSet;

use crate::ability::{Ability, AbilityScores};
use crate::dice::Die;

pub use classes::ABILITY_SCORE_IMPROVEMENT;
pub use multiclass::MULTICLASS_THRESHOLD;

/// A playable species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Species {
    /// Species name (e.g., "Elf").
    pub name: &'static str,
    /// Size category.
    pub size: &'static str,
    /// Walking speed in feet.
    pub speed: u32,
    /// Species traits.
    pub traits: &'static [&'static str],
}

/// A background and what it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    /// Background name (e.g., "Sage").
    pub name: &'static str,
    /// The three abilities the background bonus may raise.
    pub abilities: [Ability; 3],
    /// Origin feat(s) granted.
    pub feats: &'static [&'static str],
    /// The two skills granted.
    pub skills: &'static [&'static str],
    /// Tool options; exactly one is granted.
    pub tools: &'static [&'static str],
}

/// A character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDefinition {
    /// Class name (e.g., "Wizard").
    pub name: &'static str,
    /// Hit die rolled per class level.
    pub hit_die: Die,
    /// Saving throw proficiencies of the starting class.
    pub saving_throws: [Ability; 2],
    /// Skill candidates for class skill picks.
    pub skills: &'static [&'static str],
    /// Subclasses available from level 3.
    pub subclasses: &'static [&'static str],
    /// Tool proficiencies; a pick pool for classes that choose tools.
    pub tools: &'static [&'static str],
    /// Weapon proficiencies of the starting class.
    pub weapons: &'static [&'static str],
    /// Armor proficiencies of the starting class.
    pub armors: &'static [&'static str],
    /// Features gained at each class level.
    pub features: &'static [(u32, &'static [&'static str])],
}

/// How a multi-ability prerequisite is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// At least one listed ability must meet the threshold.
    Any,
    /// Every listed ability must meet the threshold.
    All,
}

/// Multiclass prerequisites and the reduced proficiencies a class grants
/// when it is not the starting class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulticlassRequirement {
    /// The class this entry describes.
    pub class: &'static str,
    /// Abilities that must reach [`MULTICLASS_THRESHOLD`].
    pub abilities: &'static [Ability],
    /// Whether any or all of `abilities` must qualify.
    pub policy: Policy,
    /// Armor proficiencies gained.
    pub armors: &'static [&'static str],
    /// Weapon proficiencies gained.
    pub weapons: &'static [&'static str],
    /// Tool proficiencies gained (or the pick pool for the Bard).
    pub tools: &'static [&'static str],
}

impl MulticlassRequirement {
    /// Whether the given scores satisfy this entry's prerequisite.
    pub fn is_met_by(&self, scores: &AbilityScores) -> bool {
        let meets = |a: &Ability| scores.score(*a) >= MULTICLASS_THRESHOLD;
        match self.policy {
            Policy::Any => self.abilities.iter().any(meets),
            Policy::All => self.abilities.iter().all(meets),
        }
    }
}

/// Feat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatCategory {
    /// Granted by backgrounds; available from level 1.
    Origin,
    /// The regular pool from level 4.
    General,
    /// Requires the Fighting Style class feature.
    FightingStyle,
    /// Level 19 capstone feats.
    EpicBoon,
}

/// A feat and its prerequisites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feat {
    /// Feat name.
    pub name: &'static str,
    /// Category.
    pub category: FeatCategory,
    /// Ability minimums; meeting any one of them qualifies.
    pub ability_prerequisites: &'static [(Ability, i32)],
    /// Class features; having any one of them qualifies.
    pub required_features: &'static [&'static str],
    /// Armor proficiencies that must all be held.
    pub required_armors: &'static [&'static str],
    /// Minimum total character level.
    pub min_level: u32,
}

impl Feat {
    /// A feat with no prerequisites beyond its level.
    pub const fn new(name: &'static str, category: FeatCategory, min_level: u32) -> Self {
        Self {
            name,
            category,
            ability_prerequisites: &[],
            required_features: &[],
            required_armors: &[],
            min_level,
        }
    }

    /// Set the ability prerequisites.
    pub const fn with_abilities(self, prerequisites: &'static [(Ability, i32)]) -> Self {
        Self {
            ability_prerequisites: prerequisites,
            ..self
        }
    }

    /// Set the required class features.
    pub const fn with_features(self, features: &'static [&'static str]) -> Self {
        Self {
            required_features: features,
            ..self
        }
    }

    /// Set the required armor proficiencies.
    pub const fn with_armors(self, armors: &'static [&'static str]) -> Self {
        Self {
            required_armors: armors,
            ..self
        }
    }

    /// Whether a character described by `ctx` may take this feat.
    pub fn is_available(&self, ctx: &FeatContext<'_>) -> bool {
        if ctx.known_feats.contains(self.name) {
            return false;
        }
        if ctx.level < self.min_level {
            return false;
        }
        let abilities_ok = self.ability_prerequisites.is_empty()
            || self
                .ability_prerequisites
                .iter()
                .any(|(ability, min)| ctx.scores.score(*ability) >= *min);
        let features_ok = self.required_features.is_empty()
            || self
                .required_features
                .iter()
                .any(|f| ctx.features.contains(*f));
        let armors_ok = self
            .required_armors
            .iter()
            .all(|a| ctx.armors.contains(*a));
        abilities_ok && features_ok && armors_ok
    }
}

/// What feat eligibility is checked against.
#[derive(Debug, Clone, Copy)]
pub struct FeatContext<'a> {
    /// Current ability scores.
    pub scores: &'a AbilityScores,
    /// Total character level across all classes.
    pub level: u32,
    /// Class features held.
    pub features: &'a BTreeSet<String>,
    /// Armor proficiencies held.
    pub armors: &'a BTreeSet<String>,
    /// Feats already taken.
    pub known_feats: &'a BTreeSet<String>,
}

/// A skill and the ability it keys off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Skill name.
    pub name: &'static str,
    /// Governing ability.
    pub ability: Ability,
}

/// One revision of the rules reference data.
#[derive(Debug, Clone)]
pub struct Ruleset {
    /// Revision name.
    pub name: &'static str,
    species: &'static [Species],
    backgrounds: &'static [Background],
    classes: &'static [ClassDefinition],
    multiclasses: &'static [MulticlassRequirement],
    feats: &'static [Feat],
    skills: &'static [Skill],
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::srd_2024()
    }
}

impl Ruleset {
    /// The 2024 ("5.5e") tables.
    pub fn srd_2024() -> Self {
        Self {
            name: "5.5e",
            species: species::SPECIES,
            backgrounds: backgrounds::BACKGROUNDS,
            classes: classes::CLASSES,
            multiclasses: multiclass::MULTICLASSES,
            feats: feats::FEATS,
            skills: skills::SKILLS,
        }
    }

    // -----------------------------------------------------------------------
    // Species
    // -----------------------------------------------------------------------

    /// Species names, sorted.
    pub fn species_names(&self) -> Vec<&'static str> {
        sorted_names(self.species.iter().map(|s| s.name))
    }

    /// Look up a species.
    pub fn species(&self, name: &str) -> Option<&'static Species> {
        self.species.iter().find(|s| s.name == name)
    }

    /// Traits granted by a species.
    pub fn traits_by_species(&self, name: &str) -> &'static [&'static str] {
        self.species(name).map_or(&[], |s| s.traits)
    }

    // -----------------------------------------------------------------------
    // Backgrounds
    // -----------------------------------------------------------------------

    /// Background names, sorted.
    pub fn background_names(&self) -> Vec<&'static str> {
        sorted_names(self.backgrounds.iter().map(|b| b.name))
    }

    /// Look up a background.
    pub fn background(&self, name: &str) -> Option<&'static Background> {
        self.backgrounds.iter().find(|b| b.name == name)
    }

    /// The three abilities a background's bonus may raise.
    pub fn abilities_by_background(&self, name: &str) -> &'static [Ability] {
        self.background(name).map_or(&[], |b| b.abilities.as_slice())
    }

    /// Skills granted by a background.
    pub fn skills_by_background(&self, name: &str) -> &'static [&'static str] {
        self.background(name).map_or(&[], |b| b.skills)
    }

    /// Tool options of a background.
    pub fn tools_by_background(&self, name: &str) -> &'static [&'static str] {
        self.background(name).map_or(&[], |b| b.tools)
    }

    /// Feats granted by a background.
    pub fn feats_by_background(&self, name: &str) -> &'static [&'static str] {
        self.background(name).map_or(&[], |b| b.feats)
    }

    // -----------------------------------------------------------------------
    // Classes
    // -----------------------------------------------------------------------

    /// Class names, sorted.
    pub fn class_names(&self) -> Vec<&'static str> {
        sorted_names(self.classes.iter().map(|c| c.name))
    }

    /// Look up a class.
    pub fn class(&self, name: &str) -> Option<&'static ClassDefinition> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// A class's hit die.
    pub fn hit_die_by_class(&self, name: &str) -> Option<Die> {
        self.class(name).map(|c| c.hit_die)
    }

    /// Saving throw proficiencies for a starting class.
    pub fn saving_throws_by_class(&self, name: &str) -> &'static [Ability] {
        self.class(name).map_or(&[], |c| c.saving_throws.as_slice())
    }

    /// Skill candidates for a class.
    pub fn skills_by_class(&self, name: &str) -> &'static [&'static str] {
        self.class(name).map_or(&[], |c| c.skills)
    }

    /// Subclasses of a class.
    pub fn subclasses_by_class(&self, name: &str) -> &'static [&'static str] {
        self.class(name).map_or(&[], |c| c.subclasses)
    }

    /// Armor proficiencies for a class, full set when primary and the
    /// multiclass set otherwise.
    pub fn armors_by_class(&self, name: &str, is_primary: bool) -> &'static [&'static str] {
        if is_primary {
            self.class(name).map_or(&[], |c| c.armors)
        } else {
            self.multiclass(name).map_or(&[], |m| m.armors)
        }
    }

    /// Weapon proficiencies for a class, full set when primary and the
    /// multiclass set otherwise.
    pub fn weapons_by_class(&self, name: &str, is_primary: bool) -> &'static [&'static str] {
        if is_primary {
            self.class(name).map_or(&[], |c| c.weapons)
        } else {
            self.multiclass(name).map_or(&[], |m| m.weapons)
        }
    }

    /// Tool proficiencies for a class, full set when primary and the
    /// multiclass set otherwise. For classes with tool picks (see
    /// [`Ruleset::tool_picks_by_class`]) this is the pool to pick from.
    pub fn tools_by_class(&self, name: &str, is_primary: bool) -> &'static [&'static str] {
        if is_primary {
            self.class(name).map_or(&[], |c| c.tools)
        } else {
            self.multiclass(name).map_or(&[], |m| m.tools)
        }
    }

    /// Number of class skills to pick.
    ///
    /// Rogue: 4 either way. Bard and Ranger: 3 as the starting class, 1
    /// otherwise. Everyone else: 2 as the starting class, 0 otherwise.
    pub fn skill_points_by_class(&self, name: &str, is_primary: bool) -> usize {
        match (name, is_primary) {
            ("Rogue", _) => 4,
            ("Bard" | "Ranger", true) => 3,
            ("Bard" | "Ranger", false) => 1,
            (_, true) => 2,
            (_, false) => 0,
        }
    }

    /// Number of tool proficiencies to pick instead of receiving the class
    /// tools outright.
    ///
    /// Bard: 3 instruments as the starting class, 1 otherwise. Monk: one
    /// artisan's tool or instrument, starting class only.
    pub fn tool_picks_by_class(&self, name: &str, is_primary: bool) -> usize {
        match (name, is_primary) {
            ("Bard", true) => 3,
            ("Bard", false) => 1,
            ("Monk", true) => 1,
            _ => 0,
        }
    }

    /// Every feature a class has gained by `level`, deduplicated and sorted.
    pub fn features_by_class(&self, name: &str, level: u32) -> Vec<&'static str> {
        let Some(class) = self.class(name) else {
            return Vec::new();
        };
        class
            .features
            .iter()
            .filter(|(gate, _)| *gate <= level)
            .flat_map(|(_, features)| features.iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// How many Ability Score Improvement slots a class has gained by `level`.
    pub fn ability_score_improvements(&self, name: &str, level: u32) -> usize {
        self.class(name).map_or(0, |class| {
            class
                .features
                .iter()
                .filter(|(gate, features)| {
                    *gate <= level && features.contains(&ABILITY_SCORE_IMPROVEMENT)
                })
                .count()
        })
    }

    /// The selectable levels `1..=max`.
    pub fn levels(max: u32) -> Vec<u32> {
        (1..=max).collect()
    }

    // -----------------------------------------------------------------------
    // Multiclassing
    // -----------------------------------------------------------------------

    /// Look up a class's multiclass entry.
    pub fn multiclass(&self, name: &str) -> Option<&'static MulticlassRequirement> {
        self.multiclasses.iter().find(|m| m.class == name)
    }

    /// Whether the scores meet a class's multiclass prerequisite.
    pub fn can_multiclass_into(&self, name: &str, scores: &AbilityScores) -> bool {
        self.multiclass(name).is_some_and(|m| m.is_met_by(scores))
    }

    /// Every class whose multiclass prerequisite the scores meet, sorted.
    pub fn eligible_multiclasses(&self, scores: &AbilityScores) -> Vec<&'static str> {
        sorted_names(
            self.multiclasses
                .iter()
                .filter(|m| m.is_met_by(scores))
                .map(|m| m.class),
        )
    }

    /// Classes a character holding `chosen` may add next: the eligible
    /// classes minus those already chosen.
    pub fn multiclass_options(&self, scores: &AbilityScores, chosen: &[&str]) -> Vec<&'static str> {
        self.eligible_multiclasses(scores)
            .into_iter()
            .filter(|c| !chosen.contains(c))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Feats
    // -----------------------------------------------------------------------

    /// Look up a feat.
    pub fn feat(&self, name: &str) -> Option<&'static Feat> {
        self.feats.iter().find(|f| f.name == name)
    }

    /// Feat names in a category, sorted.
    pub fn feats_by_category(&self, category: FeatCategory) -> Vec<&'static str> {
        sorted_names(
            self.feats
                .iter()
                .filter(|f| f.category == category)
                .map(|f| f.name),
        )
    }

    /// Feats the character described by `ctx` may take, sorted.
    pub fn eligible_feats(&self, ctx: &FeatContext<'_>) -> Vec<&'static str> {
        sorted_names(
            self.feats
                .iter()
                .filter(|f| f.is_available(ctx))
                .map(|f| f.name),
        )
    }

    // -----------------------------------------------------------------------
    // Skills
    // -----------------------------------------------------------------------

    /// Skill names, sorted.
    pub fn skill_names(&self) -> Vec<&'static str> {
        sorted_names(self.skills.iter().map(|s| s.name))
    }

    /// The ability a skill keys off.
    pub fn skill_ability(&self, name: &str) -> Option<Ability> {
        self.skills.iter().find(|s| s.name == name).map(|s| s.ability)
    }
}

fn sorted_names(names: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = names.collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::Ability::*;

    fn rules() -> Ruleset {
        Ruleset::srd_2024()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn skill_points_asymmetry() {
        let r = rules();
        assert_eq!(r.skill_points_by_class("Rogue", true), 4);
        assert_eq!(r.skill_points_by_class("Rogue", false), 4);
        assert_eq!(r.skill_points_by_class("Bard", true), 3);
        assert_eq!(r.skill_points_by_class("Bard", false), 1);
        assert_eq!(r.skill_points_by_class("Ranger", true), 3);
        assert_eq!(r.skill_points_by_class("Ranger", false), 1);
        assert_eq!(r.skill_points_by_class("Cleric", true), 2);
        assert_eq!(r.skill_points_by_class("Cleric", false), 0);
        assert_eq!(r.skill_points_by_class("Wizard", false), 0);
    }

    #[test]
    fn tool_picks() {
        let r = rules();
        assert_eq!(r.tool_picks_by_class("Bard", true), 3);
        assert_eq!(r.tool_picks_by_class("Bard", false), 1);
        assert_eq!(r.tool_picks_by_class("Monk", true), 1);
        assert_eq!(r.tool_picks_by_class("Monk", false), 0);
        assert_eq!(r.tool_picks_by_class("Rogue", true), 0);
    }

    #[test]
    fn primary_and_secondary_proficiencies_differ() {
        let r = rules();
        assert_eq!(r.armors_by_class("Barbarian", true), &["Light", "Medium", "Shield"]);
        assert_eq!(r.armors_by_class("Barbarian", false), &["Shield"]);
        assert_eq!(r.weapons_by_class("Wizard", false), &[] as &[&str]);
        assert_eq!(r.tools_by_class("Rogue", false), &["Thieves' Tools"]);
        assert!(r.tools_by_class("Monk", false).is_empty());
    }

    #[test]
    fn features_are_cumulative_deduplicated_and_sorted() {
        let r = rules();
        let features = r.features_by_class("Wizard", 5);
        assert_eq!(
            features,
            vec![
                "Ability Score Improvement",
                "Arcane Recovery",
                "Memorize Spell",
                "Ritual Adept",
                "Scholar",
                "Spellcasting",
                "Wizard Subclass",
            ]
        );

        let barbarian = r.features_by_class("Barbarian", 20);
        let brutal = barbarian
            .iter()
            .filter(|f| **f == "Improved Brutal Strike")
            .count();
        assert_eq!(brutal, 1);
        assert!(barbarian.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn features_at_level_one_only() {
        let r = rules();
        assert_eq!(
            r.features_by_class("Fighter", 1),
            vec!["Fighting Style", "Second Wind", "Weapon Mastery"]
        );
    }

    #[test]
    fn ability_score_improvement_counts() {
        let r = rules();
        assert_eq!(r.ability_score_improvements("Wizard", 3), 0);
        assert_eq!(r.ability_score_improvements("Wizard", 5), 1);
        assert_eq!(r.ability_score_improvements("Wizard", 20), 4);
        assert_eq!(r.ability_score_improvements("Fighter", 20), 6);
        assert_eq!(r.ability_score_improvements("Rogue", 10), 3);
        assert_eq!(r.ability_score_improvements("Nobody", 20), 0);
    }

    #[test]
    fn unknown_names_yield_empty() {
        let r = rules();
        assert!(r.skills_by_class("Artificer").is_empty());
        assert!(r.skills_by_class("wizard").is_empty());
        assert!(r.features_by_class("Artificer", 20).is_empty());
        assert!(r.abilities_by_background("Pirate").is_empty());
        assert!(r.traits_by_species("Kender").is_empty());
        assert_eq!(r.hit_die_by_class("Artificer"), None);
        assert!(!r.can_multiclass_into("Artificer", &AbilityScores::from_array([18; 6])));
    }

    #[test]
    fn levels_range() {
        assert_eq!(Ruleset::levels(3), vec![1, 2, 3]);
        assert!(Ruleset::levels(0).is_empty());
        assert_eq!(Ruleset::levels(20).len(), 20);
    }

    #[test]
    fn names_are_sorted() {
        let r = rules();
        let classes = r.class_names();
        assert_eq!(classes.len(), 12);
        assert_eq!(classes[0], "Barbarian");
        assert_eq!(classes[11], "Wizard");
        assert_eq!(r.species_names().len(), 10);
        assert_eq!(r.background_names().len(), 16);
        assert!(r.background_names().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn multiclass_all_policy() {
        let r = rules();
        // Str Dex Con Int Wis Cha
        let dex_only = AbilityScores::from_array([10, 15, 10, 10, 12, 10]);
        assert!(!r.can_multiclass_into("Monk", &dex_only));
        assert!(!r.can_multiclass_into("Ranger", &dex_only));
        let dex_wis = AbilityScores::from_array([10, 13, 10, 10, 13, 10]);
        assert!(r.can_multiclass_into("Monk", &dex_wis));
        assert!(r.can_multiclass_into("Ranger", &dex_wis));

        let str_only = AbilityScores::from_array([16, 10, 10, 10, 10, 12]);
        assert!(!r.can_multiclass_into("Paladin", &str_only));
        let str_cha = AbilityScores::from_array([16, 10, 10, 10, 10, 13]);
        assert!(r.can_multiclass_into("Paladin", &str_cha));
    }

    #[test]
    fn multiclass_fighter_any_policy() {
        let r = rules();
        let strong = AbilityScores::from_array([13, 8, 10, 10, 10, 10]);
        let nimble = AbilityScores::from_array([8, 13, 10, 10, 10, 10]);
        let neither = AbilityScores::from_array([12, 12, 10, 10, 10, 10]);
        assert!(r.can_multiclass_into("Fighter", &strong));
        assert!(r.can_multiclass_into("Fighter", &nimble));
        assert!(!r.can_multiclass_into("Fighter", &neither));
    }

    #[test]
    fn eligible_multiclasses_threshold_is_thirteen() {
        let r = rules();
        let scores = AbilityScores::from_array([8, 10, 14, 13, 12, 15]);
        assert_eq!(
            r.eligible_multiclasses(&scores),
            vec!["Bard", "Sorcerer", "Warlock", "Wizard"]
        );
        let weak = AbilityScores::from_array([12; 6]);
        assert!(r.eligible_multiclasses(&weak).is_empty());
    }

    #[test]
    fn multiclass_options_exclude_chosen_classes() {
        let r = rules();
        let scores = AbilityScores::from_array([8, 10, 14, 15, 12, 13]);
        assert_eq!(
            r.multiclass_options(&scores, &["Wizard"]),
            vec!["Bard", "Sorcerer", "Warlock"]
        );
        // Cleric needs Wisdom 13 to be added, not to add others.
        assert_eq!(
            r.multiclass_options(&scores, &["Cleric"]),
            vec!["Bard", "Sorcerer", "Warlock", "Wizard"]
        );
        assert!(
            r.multiclass_options(&scores, &["Bard", "Sorcerer", "Warlock", "Wizard"])
                .is_empty()
        );
    }

    #[test]
    fn feat_eligibility() {
        let r = rules();
        let scores = AbilityScores::from_array([8, 14, 12, 15, 10, 10]);
        let features = set(&["Spellcasting", "Ability Score Improvement"]);
        let armors = set(&[]);
        let known = set(&["Magic Initiate"]);
        let ctx = FeatContext {
            scores: &scores,
            level: 4,
            features: &features,
            armors: &armors,
            known_feats: &known,
        };
        let feats = r.eligible_feats(&ctx);

        // Dex 14 satisfies either-or Str/Dex prerequisites.
        assert!(feats.contains(&"Athlete"));
        assert!(feats.contains(&"Keen Mind"));
        assert!(feats.contains(&"War Caster"));
        // Already held
        assert!(!feats.contains(&"Magic Initiate"));
        // Charisma 10
        assert!(!feats.contains(&"Actor"));
        // No Fighting Style feature
        assert!(!feats.contains(&"Archery"));
        // Needs Medium armor proficiency
        assert!(!feats.contains(&"Heavily Armored"));
        // Level 19
        assert!(!feats.contains(&"Boon of Fate"));
        assert!(feats.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn feat_level_and_armor_gates() {
        let r = rules();
        let scores = AbilityScores::from_array([15, 10, 14, 10, 10, 10]);
        let features = set(&["Fighting Style"]);
        let armors = set(&["Light", "Medium", "Heavy", "Shield"]);
        let known = set(&[]);
        let low = FeatContext {
            scores: &scores,
            level: 1,
            features: &features,
            armors: &armors,
            known_feats: &known,
        };
        let feats = r.eligible_feats(&low);
        assert!(feats.contains(&"Archery"));
        assert!(feats.contains(&"Tough"));
        assert!(!feats.contains(&"Heavy Armor Master"));

        let epic = FeatContext { level: 19, ..low };
        let feats = r.eligible_feats(&epic);
        assert!(feats.contains(&"Heavy Armor Master"));
        assert!(feats.contains(&"Boon of Fate"));
        assert!(!feats.contains(&"Boon of Spell Recall"));
    }

    #[test]
    fn background_lookups() {
        let r = rules();
        assert_eq!(r.abilities_by_background("Sage"), &[Constitution, Intelligence, Wisdom]);
        assert_eq!(r.skills_by_background("Sage"), &["Arcana", "History"]);
        assert_eq!(r.feats_by_background("Sage"), &["Magic Initiate"]);
        assert_eq!(r.tools_by_background("Guard").len(), 4);
    }

    #[test]
    fn skill_ability_lookup() {
        let r = rules();
        assert_eq!(r.skill_ability("Stealth"), Some(Dexterity));
        assert_eq!(r.skill_ability("Athletics"), Some(Strength));
        assert_eq!(r.skill_ability("Cooking"), None);
        assert_eq!(r.skill_names().len(), 18);
    }

    #[test]
    fn tables_are_consistent() {
        let r = rules();
        for class in r.class_names() {
            assert!(r.multiclass(class).is_some(), "{class} has no multiclass entry");
            assert_eq!(r.subclasses_by_class(class).len(), 4);
            for skill in r.skills_by_class(class) {
                assert!(r.skill_ability(skill).is_some(), "{class}: unknown skill {skill}");
            }
        }
        for background in r.background_names() {
            for skill in r.skills_by_background(background) {
                assert!(r.skill_ability(skill).is_some(), "{background}: unknown skill {skill}");
            }
            for feat in r.feats_by_background(background) {
                let feat = r.feat(feat).unwrap();
                assert_eq!(feat.category, FeatCategory::Origin);
            }
            assert!(!r.tools_by_background(background).is_empty());
        }
        assert_eq!(r.feats_by_category(FeatCategory::Origin).len(), 10);
    }
}
