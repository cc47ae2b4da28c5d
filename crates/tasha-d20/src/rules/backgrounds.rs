//! Backgrounds: ability affinities, origin feat, skills, and tool.

use super::Background;
use super::tools::{ARTISANS_TOOLS, GAMING_SETS, MUSICAL_INSTRUMENTS};
use crate::ability::Ability::{Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom};

/// All backgrounds, sorted by name.
///
/// A background with several tools grants one of them; a background with a
/// single tool grants it outright.
pub const BACKGROUNDS: &[Background] = &[
    Background {
        name: "Acolyte",
        abilities: [Intelligence, Wisdom, Charisma],
        feats: &["Magic Initiate"],
        skills: &["Insight", "Religion"],
        tools: &["Artisan's Tools - Calligrapher's Supplies"],
    },
    Background {
        name: "Artisan",
        abilities: [Strength, Dexterity, Intelligence],
        feats: &["Crafter"],
        skills: &["Investigation", "Persuasion"],
        tools: ARTISANS_TOOLS,
    },
    Background {
        name: "Charlatan",
        abilities: [Dexterity, Constitution, Charisma],
        feats: &["Skilled"],
        skills: &["Deception", "Sleight of Hand"],
        tools: &["Forgery Kit"],
    },
    Background {
        name: "Criminal",
        abilities: [Dexterity, Constitution, Intelligence],
        feats: &["Alert"],
        skills: &["Sleight of Hand", "Stealth"],
        tools: &["Thieves' Tools"],
    },
    Background {
        name: "Entertainer",
        abilities: [Strength, Dexterity, Charisma],
        feats: &["Musician"],
        skills: &["Acrobatics", "Performance"],
        tools: MUSICAL_INSTRUMENTS,
    },
    Background {
        name: "Farmer",
        abilities: [Strength, Constitution, Wisdom],
        feats: &["Tough"],
        skills: &["Animal Handling", "Nature"],
        tools: &["Artisan's Tools - Carpenter's Tools"],
    },
    Background {
        name: "Guard",
        abilities: [Strength, Intelligence, Wisdom],
        feats: &["Alert"],
        skills: &["Athletics", "Perception"],
        tools: GAMING_SETS,
    },
    Background {
        name: "Guide",
        abilities: [Dexterity, Constitution, Wisdom],
        feats: &["Magic Initiate"],
        skills: &["Stealth", "Survival"],
        tools: &["Artisan's Tools - Cartographer's Tools"],
    },
    Background {
        name: "Hermit",
        abilities: [Constitution, Wisdom, Charisma],
        feats: &["Healer"],
        skills: &["Medicine", "Religion"],
        tools: &["Herbalism Kit"],
    },
    Background {
        name: "Merchant",
        abilities: [Constitution, Intelligence, Charisma],
        feats: &["Lucky"],
        skills: &["Animal Handling", "Persuasion"],
        tools: &["Navigator's Tools"],
    },
    Background {
        name: "Noble",
        abilities: [Strength, Intelligence, Charisma],
        feats: &["Skilled"],
        skills: &["History", "Persuasion"],
        tools: GAMING_SETS,
    },
    Background {
        name: "Sage",
        abilities: [Constitution, Intelligence, Wisdom],
        feats: &["Magic Initiate"],
        skills: &["Arcana", "History"],
        tools: &["Artisan's Tools - Calligrapher's Supplies"],
    },
    Background {
        name: "Sailor",
        abilities: [Strength, Dexterity, Wisdom],
        feats: &["Tavern Brawler"],
        skills: &["Acrobatics", "Perception"],
        tools: &["Navigator's Tools"],
    },
    Background {
        name: "Scribe",
        abilities: [Dexterity, Intelligence, Wisdom],
        feats: &["Skilled"],
        skills: &["Investigation", "Perception"],
        tools: &["Artisan's Tools - Calligrapher's Supplies"],
    },
    Background {
        name: "Soldier",
        abilities: [Strength, Dexterity, Constitution],
        feats: &["Savage Attacker"],
        skills: &["Athletics", "Intimidation"],
        tools: GAMING_SETS,
    },
    Background {
        name: "Wayfarer",
        abilities: [Dexterity, Wisdom, Charisma],
        feats: &["Lucky"],
        skills: &["Insight", "Stealth"],
        tools: &["Thieves' Tools"],
    },
];
