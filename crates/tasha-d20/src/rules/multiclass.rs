//! Multiclassing prerequisites and the proficiencies a secondary class
//! grants.

use super::{MulticlassRequirement, Policy};
use super::tools::MUSICAL_INSTRUMENTS;
use crate::ability::Ability::{Charisma, Dexterity, Intelligence, Strength, Wisdom};

/// Minimum score each required ability must reach.
pub const MULTICLASS_THRESHOLD: i32 = 13;

/// Multiclass entries for every class, sorted by class name.
pub const MULTICLASSES: &[MulticlassRequirement] = &[
    MulticlassRequirement {
        class: "Barbarian",
        abilities: &[Strength],
        policy: Policy::All,
        armors: &["Shield"],
        weapons: &["Martial"],
        tools: &[],
    },
    MulticlassRequirement {
        class: "Bard",
        abilities: &[Charisma],
        policy: Policy::All,
        armors: &["Light"],
        weapons: &[],
        tools: MUSICAL_INSTRUMENTS,
    },
    MulticlassRequirement {
        class: "Cleric",
        abilities: &[Wisdom],
        policy: Policy::All,
        armors: &["Light", "Medium", "Shield"],
        weapons: &[],
        tools: &[],
    },
    MulticlassRequirement {
        class: "Druid",
        abilities: &[Wisdom],
        policy: Policy::All,
        armors: &["Light", "Shield"],
        weapons: &[],
        tools: &[],
    },
    MulticlassRequirement {
        class: "Fighter",
        abilities: &[Strength, Dexterity],
        policy: Policy::Any,
        armors: &["Light", "Medium", "Shield"],
        weapons: &["Martial"],
        tools: &[],
    },
    MulticlassRequirement {
        class: "Monk",
        abilities: &[Dexterity, Wisdom],
        policy: Policy::All,
        armors: &[],
        weapons: &[],
        tools: &[],
    },
    MulticlassRequirement {
        class: "Paladin",
        abilities: &[Strength, Charisma],
        policy: Policy::All,
        armors: &["Light", "Medium", "Shield"],
        weapons: &["Martial"],
        tools: &[],
    },
    MulticlassRequirement {
        class: "Ranger",
        abilities: &[Dexterity, Wisdom],
        policy: Policy::All,
        armors: &["Light", "Medium", "Shield"],
        weapons: &["Martial"],
        tools: &[],
    },
    MulticlassRequirement {
        class: "Rogue",
        abilities: &[Dexterity],
        policy: Policy::All,
        armors: &["Light"],
        weapons: &[],
        tools: &["Thieves' Tools"],
    },
    MulticlassRequirement {
        class: "Sorcerer",
        abilities: &[Charisma],
        policy: Policy::All,
        armors: &[],
        weapons: &[],
        tools: &[],
    },
    MulticlassRequirement {
        class: "Warlock",
        abilities: &[Charisma],
        policy: Policy::All,
        armors: &["Light"],
        weapons: &[],
        tools: &[],
    },
    MulticlassRequirement {
        class: "Wizard",
        abilities: &[Intelligence],
        policy: Policy::All,
        armors: &[],
        weapons: &[],
        tools: &[],
    },
];
