//! Feats and their prerequisites.

use super::{Feat, FeatCategory};
use crate::ability::Ability::{self, Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom};

const fn origin(name: &'static str) -> Feat {
    Feat::new(name, FeatCategory::Origin, 1)
}

const fn general(name: &'static str) -> Feat {
    Feat::new(name, FeatCategory::General, 4)
}

const fn fighting_style(name: &'static str) -> Feat {
    Feat::new(name, FeatCategory::FightingStyle, 1).with_features(&["Fighting Style"])
}

const fn epic_boon(name: &'static str) -> Feat {
    Feat::new(name, FeatCategory::EpicBoon, 19)
}

const SPELLCASTER: &[&str] = &["Pact Magic", "Spellcasting"];
const STR_OR_DEX: &[(Ability, i32)] = &[(Strength, 13), (Dexterity, 13)];

/// Every feat in the ruleset.
pub const FEATS: &[Feat] = &[
    general("Actor").with_abilities(&[(Charisma, 13)]),
    origin("Alert"),
    fighting_style("Archery"),
    general("Athlete").with_abilities(STR_OR_DEX),
    fighting_style("Blind Fighting"),
    epic_boon("Boon of Combat Prowess"),
    epic_boon("Boon of Dimensional Travel"),
    epic_boon("Boon of Energy Resistance"),
    epic_boon("Boon of Fate"),
    epic_boon("Boon of Fortitude"),
    epic_boon("Boon of Irresistible Offense"),
    epic_boon("Boon of Recovery"),
    epic_boon("Boon of Skill"),
    epic_boon("Boon of Speed"),
    epic_boon("Boon of Spell Recall").with_features(&["Spellcasting"]),
    epic_boon("Boon of the Night Spirit"),
    epic_boon("Boon of Truesight"),
    general("Charger").with_abilities(STR_OR_DEX),
    general("Chef"),
    origin("Crafter"),
    general("Crossbow Expert").with_abilities(&[(Dexterity, 13)]),
    general("Crusher"),
    fighting_style("Defense"),
    general("Defensive Duelist").with_abilities(&[(Dexterity, 13)]),
    general("Dual Wielder").with_abilities(STR_OR_DEX),
    fighting_style("Dueling"),
    general("Durable"),
    general("Elemental Adept").with_features(SPELLCASTER),
    general("Fey-Touched"),
    general("Grappler").with_abilities(STR_OR_DEX),
    fighting_style("Great Weapon Fighting"),
    general("Great Weapon Master").with_abilities(&[(Strength, 13)]),
    origin("Healer"),
    general("Heavily Armored").with_armors(&["Medium"]),
    general("Heavy Armor Master").with_armors(&["Heavy"]),
    general("Inspiring Leader").with_abilities(&[(Wisdom, 13), (Charisma, 13)]),
    fighting_style("Interception"),
    general("Keen Mind").with_abilities(&[(Intelligence, 13)]),
    general("Lightly Armored"),
    origin("Lucky"),
    general("Mage Slayer"),
    origin("Magic Initiate"),
    general("Martial Weapon Training"),
    general("Medium Armor Master").with_armors(&["Medium"]),
    general("Moderately Armored").with_armors(&["Light"]),
    general("Mounted Combatant"),
    origin("Musician"),
    general("Observant").with_abilities(&[(Intelligence, 13), (Wisdom, 13)]),
    general("Piercer"),
    general("Poisoner"),
    general("Polearm Master").with_abilities(STR_OR_DEX),
    fighting_style("Protection"),
    general("Resilient"),
    general("Ritual Caster").with_abilities(&[(Intelligence, 13), (Wisdom, 13), (Charisma, 13)]),
    origin("Savage Attacker"),
    general("Sentinel").with_abilities(STR_OR_DEX),
    general("Shadow-Touched"),
    general("Sharpshooter").with_abilities(&[(Dexterity, 13)]),
    general("Shield Master").with_armors(&["Shield"]),
    general("Skill Expert"),
    origin("Skilled"),
    general("Skulker").with_abilities(&[(Dexterity, 13)]),
    general("Slasher"),
    general("Speedy").with_abilities(&[(Dexterity, 13), (Constitution, 13)]),
    general("Spell Sniper").with_features(SPELLCASTER),
    origin("Tavern Brawler"),
    general("Telekinetic"),
    general("Telepathic"),
    fighting_style("Thrown Weapon Fighting"),
    origin("Tough"),
    fighting_style("Two-Weapon Fighting"),
    fighting_style("Unarmed Fighting"),
    general("War Caster").with_features(SPELLCASTER),
    general("Weapon Master"),
];
