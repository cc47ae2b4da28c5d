//! Character classes: hit dice, proficiencies, subclasses, and features by
//! level.

use super::ClassDefinition;
use super::tools::{ARTISANS_TOOLS_OR_INSTRUMENTS, MUSICAL_INSTRUMENTS};
use crate::ability::Ability::{Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom};
use crate::dice::Die;

/// Feature name that grants a feat or ability score upgrade.
pub const ABILITY_SCORE_IMPROVEMENT: &str = "Ability Score Improvement";

const ASI: &str = ABILITY_SCORE_IMPROVEMENT;
const SUBCLASS_FEATURE: &str = "Subclass Feature";

/// All classes, sorted by name.
pub const CLASSES: &[ClassDefinition] = &[
    ClassDefinition {
        name: "Barbarian",
        hit_die: Die::D12,
        saving_throws: [Strength, Constitution],
        skills: &[
            "Animal Handling",
            "Athletics",
            "Intimidation",
            "Nature",
            "Perception",
            "Survival",
        ],
        subclasses: &[
            "Path of the Berserker",
            "Path of the Wild Heart",
            "Path of the World Tree",
            "Path of the Zealot",
        ],
        tools: &[],
        weapons: &["Simple", "Martial"],
        armors: &["Light", "Medium", "Shield"],
        features: &[
            (1, &["Rage", "Unarmored Defense", "Weapon Mastery"]),
            (2, &["Danger Sense", "Reckless Attack"]),
            (3, &["Barbarian Subclass", "Primal Knowledge"]),
            (4, &[ASI]),
            (5, &["Extra Attack", "Fast Movement"]),
            (6, &[SUBCLASS_FEATURE]),
            (7, &["Feral Instinct", "Instinctive Pounce"]),
            (8, &[ASI]),
            (9, &["Brutal Strike"]),
            (10, &[SUBCLASS_FEATURE]),
            (11, &["Relentless Rage"]),
            (12, &[ASI]),
            (13, &["Improved Brutal Strike"]),
            (14, &[SUBCLASS_FEATURE]),
            (15, &["Persistent Rage"]),
            (16, &[ASI]),
            (17, &["Improved Brutal Strike"]),
            (18, &["Indomitable Might"]),
            (19, &["Epic Boon"]),
            (20, &["Primal Champion"]),
        ],
    },
    ClassDefinition {
        name: "Bard",
        hit_die: Die::D8,
        saving_throws: [Dexterity, Charisma],
        skills: &[
            "Acrobatics",
            "Animal Handling",
            "Arcana",
            "Athletics",
            "Deception",
            "History",
            "Insight",
            "Intimidation",
            "Investigation",
            "Medicine",
            "Nature",
            "Perception",
            "Performance",
            "Persuasion",
            "Religion",
            "Sleight of Hand",
            "Stealth",
            "Survival",
        ],
        subclasses: &[
            "College of Dance",
            "College of Glamour",
            "College of Lore",
            "College of Valor",
        ],
        tools: MUSICAL_INSTRUMENTS,
        weapons: &["Simple"],
        armors: &["Light"],
        features: &[
            (1, &["Bardic Inspiration", "Spellcasting"]),
            (2, &["Expertise", "Jack of All Trades"]),
            (3, &["Bard Subclass"]),
            (4, &[ASI]),
            (5, &["Font of Inspiration"]),
            (6, &[SUBCLASS_FEATURE]),
            (7, &["Countercharm"]),
            (8, &[ASI]),
            (9, &["Expertise"]),
            (10, &["Magical Secrets"]),
            (12, &[ASI]),
            (14, &[SUBCLASS_FEATURE]),
            (16, &[ASI]),
            (18, &["Superior Inspiration"]),
            (19, &["Epic Boon"]),
            (20, &["Words of Creation"]),
        ],
    },
    ClassDefinition {
        name: "Cleric",
        hit_die: Die::D8,
        saving_throws: [Wisdom, Charisma],
        skills: &["History", "Insight", "Medicine", "Persuasion", "Religion"],
        subclasses: &[
            "Life Domain",
            "Light Domain",
            "Trickery Domain",
            "War Domain",
        ],
        tools: &[],
        weapons: &["Simple"],
        armors: &["Light", "Medium", "Shield"],
        features: &[
            (1, &["Divine Order", "Spellcasting"]),
            (2, &["Channel Divinity"]),
            (3, &["Cleric Subclass"]),
            (4, &[ASI]),
            (5, &["Sear Undead"]),
            (6, &[SUBCLASS_FEATURE]),
            (7, &["Blessed Strikes"]),
            (8, &[ASI]),
            (10, &["Divine Intervention"]),
            (12, &[ASI]),
            (14, &["Improved Blessed Strikes"]),
            (16, &[ASI]),
            (17, &[SUBCLASS_FEATURE]),
            (19, &["Epic Boon"]),
            (20, &["Greater Divine Intervention"]),
        ],
    },
    ClassDefinition {
        name: "Druid",
        hit_die: Die::D8,
        saving_throws: [Intelligence, Wisdom],
        skills: &[
            "Animal Handling",
            "Arcana",
            "Insight",
            "Medicine",
            "Nature",
            "Perception",
            "Religion",
            "Survival",
        ],
        subclasses: &[
            "Circle of the Land",
            "Circle of the Moon",
            "Circle of the Sea",
            "Circle of the Stars",
        ],
        tools: &["Herbalism Kit"],
        weapons: &["Simple"],
        armors: &["Light", "Shield"],
        features: &[
            (1, &["Druidic", "Primal Order", "Spellcasting"]),
            (2, &["Wild Companion", "Wild Shape"]),
            (3, &["Druid Subclass"]),
            (4, &[ASI]),
            (5, &["Wild Resurgence"]),
            (6, &[SUBCLASS_FEATURE]),
            (7, &["Elemental Fury"]),
            (8, &[ASI]),
            (10, &[SUBCLASS_FEATURE]),
            (12, &[ASI]),
            (14, &[SUBCLASS_FEATURE]),
            (15, &["Improved Elemental Fury"]),
            (16, &[ASI]),
            (18, &["Beast Spells"]),
            (19, &["Epic Boon"]),
            (20, &["Archdruid"]),
        ],
    },
    ClassDefinition {
        name: "Fighter",
        hit_die: Die::D10,
        saving_throws: [Strength, Constitution],
        skills: &[
            "Acrobatics",
            "Animal Handling",
            "Athletics",
            "History",
            "Insight",
            "Intimidation",
            "Perception",
            "Persuasion",
            "Survival",
        ],
        subclasses: &[
            "Battle Master",
            "Champion",
            "Eldritch Knight",
            "Psi Warrior",
        ],
        tools: &[],
        weapons: &["Simple", "Martial"],
        armors: &["Light", "Medium", "Heavy", "Shield"],
        features: &[
            (1, &["Fighting Style", "Second Wind", "Weapon Mastery"]),
            (2, &["Action Surge", "Tactical Mind"]),
            (3, &["Fighter Subclass"]),
            (4, &[ASI]),
            (5, &["Extra Attack", "Tactical Shift"]),
            (6, &[ASI]),
            (7, &[SUBCLASS_FEATURE]),
            (8, &[ASI]),
            (9, &["Indomitable", "Tactical Master"]),
            (10, &[SUBCLASS_FEATURE]),
            (11, &["Two Extra Attacks"]),
            (12, &[ASI]),
            (13, &["Studied Attacks"]),
            (14, &[ASI]),
            (15, &[SUBCLASS_FEATURE]),
            (16, &[ASI]),
            (17, &["Improved Action Surge", "Improved Indomitable"]),
            (18, &[SUBCLASS_FEATURE]),
            (19, &["Epic Boon"]),
            (20, &["Three Extra Attacks"]),
        ],
    },
    ClassDefinition {
        name: "Monk",
        hit_die: Die::D8,
        saving_throws: [Strength, Dexterity],
        skills: &[
            "Acrobatics",
            "Athletics",
            "History",
            "Insight",
            "Religion",
            "Stealth",
        ],
        subclasses: &[
            "Warrior of Mercy",
            "Warrior of Shadow",
            "Warrior of the Elements",
            "Warrior of the Open Hand",
        ],
        tools: ARTISANS_TOOLS_OR_INSTRUMENTS,
        weapons: &["Simple", "Martial (Light)"],
        armors: &[],
        features: &[
            (1, &["Martial Arts", "Unarmored Defense"]),
            (2, &["Monk's Focus", "Unarmored Movement", "Uncanny Metabolism"]),
            (3, &["Deflect Attacks", "Monk Subclass"]),
            (4, &[ASI, "Slow Fall"]),
            (5, &["Extra Attack", "Stunning Strike"]),
            (6, &["Empowered Strikes", SUBCLASS_FEATURE]),
            (7, &["Evasion"]),
            (8, &[ASI]),
            (9, &["Acrobatic Movement"]),
            (10, &["Heightened Focus", "Self-Restoration"]),
            (11, &[SUBCLASS_FEATURE]),
            (12, &[ASI]),
            (13, &["Deflect Energy"]),
            (14, &["Disciplined Survivor"]),
            (15, &["Perfect Focus"]),
            (16, &[ASI]),
            (17, &[SUBCLASS_FEATURE]),
            (18, &["Superior Defense"]),
            (19, &["Epic Boon"]),
            (20, &["Body and Mind"]),
        ],
    },
    ClassDefinition {
        name: "Paladin",
        hit_die: Die::D10,
        saving_throws: [Wisdom, Charisma],
        skills: &[
            "Athletics",
            "Insight",
            "Intimidation",
            "Medicine",
            "Persuasion",
            "Religion",
        ],
        subclasses: &[
            "Oath of Devotion",
            "Oath of Glory",
            "Oath of the Ancients",
            "Oath of Vengeance",
        ],
        tools: &[],
        weapons: &["Simple", "Martial"],
        armors: &["Light", "Medium", "Heavy", "Shield"],
        features: &[
            (1, &["Lay On Hands", "Spellcasting", "Weapon Mastery"]),
            (2, &["Fighting Style", "Paladin's Smite"]),
            (3, &["Channel Divinity", "Paladin Subclass"]),
            (4, &[ASI]),
            (5, &["Extra Attack", "Faithful Steed"]),
            (6, &["Aura of Protection"]),
            (7, &[SUBCLASS_FEATURE]),
            (8, &[ASI]),
            (9, &["Abjure Foes"]),
            (10, &["Aura of Courage"]),
            (11, &["Radiant Strikes"]),
            (12, &[ASI]),
            (14, &["Restoring Touch"]),
            (15, &[SUBCLASS_FEATURE]),
            (16, &[ASI]),
            (18, &["Aura Expansion"]),
            (19, &["Epic Boon"]),
            (20, &[SUBCLASS_FEATURE]),
        ],
    },
    ClassDefinition {
        name: "Ranger",
        hit_die: Die::D10,
        saving_throws: [Strength, Dexterity],
        skills: &[
            "Animal Handling",
            "Athletics",
            "Insight",
            "Investigation",
            "Nature",
            "Perception",
            "Stealth",
            "Survival",
        ],
        subclasses: &["Beast Master", "Fey Wanderer", "Gloom Stalker", "Hunter"],
        tools: &[],
        weapons: &["Simple", "Martial"],
        armors: &["Light", "Medium", "Shield"],
        features: &[
            (1, &["Favored Enemy", "Spellcasting", "Weapon Mastery"]),
            (2, &["Deft Explorer", "Fighting Style"]),
            (3, &["Ranger Subclass"]),
            (4, &[ASI]),
            (5, &["Extra Attack"]),
            (6, &["Roving"]),
            (7, &[SUBCLASS_FEATURE]),
            (8, &[ASI]),
            (9, &["Expertise"]),
            (10, &["Tireless"]),
            (11, &[SUBCLASS_FEATURE]),
            (12, &[ASI]),
            (13, &["Relentless Hunter"]),
            (14, &["Nature's Veil"]),
            (15, &[SUBCLASS_FEATURE]),
            (16, &[ASI]),
            (17, &["Precise Hunter"]),
            (18, &["Feral Senses"]),
            (19, &["Epic Boon"]),
            (20, &["Foe Slayer"]),
        ],
    },
    ClassDefinition {
        name: "Rogue",
        hit_die: Die::D8,
        saving_throws: [Dexterity, Intelligence],
        skills: &[
            "Acrobatics",
            "Athletics",
            "Deception",
            "Insight",
            "Intimidation",
            "Investigation",
            "Perception",
            "Performance",
            "Persuasion",
            "Sleight of Hand",
            "Stealth",
        ],
        subclasses: &["Arcane Trickster", "Assassin", "Soulknife", "Thief"],
        tools: &["Thieves' Tools"],
        weapons: &["Simple", "Martial (Finesse, Light)"],
        armors: &["Light"],
        features: &[
            (
                1,
                &["Expertise", "Sneak Attack", "Thieves' Cant", "Weapon Mastery"],
            ),
            (2, &["Cunning Action"]),
            (3, &["Rogue Subclass", "Steady Aim"]),
            (4, &[ASI]),
            (5, &["Cunning Strike", "Uncanny Dodge"]),
            (6, &["Expertise"]),
            (7, &["Evasion", "Reliable Talent"]),
            (8, &[ASI]),
            (9, &[SUBCLASS_FEATURE]),
            (10, &[ASI]),
            (11, &["Improved Cunning Strike"]),
            (12, &[ASI]),
            (13, &[SUBCLASS_FEATURE]),
            (14, &["Devious Strikes"]),
            (15, &["Slippery Mind"]),
            (16, &[ASI]),
            (17, &[SUBCLASS_FEATURE]),
            (18, &["Elusive"]),
            (19, &["Epic Boon"]),
            (20, &["Stroke of Luck"]),
        ],
    },
    ClassDefinition {
        name: "Sorcerer",
        hit_die: Die::D6,
        saving_throws: [Constitution, Charisma],
        skills: &[
            "Arcana",
            "Deception",
            "Insight",
            "Intimidation",
            "Persuasion",
            "Religion",
        ],
        subclasses: &[
            "Aberrant Sorcery",
            "Clockwork Sorcery",
            "Draconic Sorcery",
            "Wild Magic Sorcery",
        ],
        tools: &[],
        weapons: &["Simple"],
        armors: &[],
        features: &[
            (1, &["Innate Sorcery", "Spellcasting"]),
            (2, &["Font of Magic", "Metamagic"]),
            (3, &["Sorcerer Subclass"]),
            (4, &[ASI]),
            (5, &["Sorcerous Restoration"]),
            (6, &[SUBCLASS_FEATURE]),
            (7, &["Sorcery Incarnate"]),
            (8, &[ASI]),
            (10, &["Metamagic"]),
            (12, &[ASI]),
            (14, &[SUBCLASS_FEATURE]),
            (16, &[ASI]),
            (17, &["Metamagic"]),
            (18, &[SUBCLASS_FEATURE]),
            (19, &["Epic Boon"]),
            (20, &["Arcane Apotheosis"]),
        ],
    },
    ClassDefinition {
        name: "Warlock",
        hit_die: Die::D8,
        saving_throws: [Wisdom, Charisma],
        skills: &[
            "Arcana",
            "Deception",
            "History",
            "Intimidation",
            "Investigation",
            "Nature",
            "Religion",
        ],
        subclasses: &[
            "Archfey Patron",
            "Celestial Patron",
            "Fiend Patron",
            "Great Old One Patron",
        ],
        tools: &[],
        weapons: &["Simple"],
        armors: &["Light"],
        features: &[
            (1, &["Eldritch Invocations", "Pact Magic"]),
            (2, &["Magical Cunning"]),
            (3, &["Warlock Subclass"]),
            (4, &[ASI]),
            (6, &[SUBCLASS_FEATURE]),
            (8, &[ASI]),
            (9, &["Contact Patron"]),
            (10, &[SUBCLASS_FEATURE]),
            (11, &["Mystic Arcanum"]),
            (12, &[ASI]),
            (14, &[SUBCLASS_FEATURE]),
            (16, &[ASI]),
            (19, &["Epic Boon"]),
            (20, &["Eldritch Master"]),
        ],
    },
    ClassDefinition {
        name: "Wizard",
        hit_die: Die::D6,
        saving_throws: [Intelligence, Wisdom],
        skills: &[
            "Arcana",
            "History",
            "Insight",
            "Investigation",
            "Medicine",
            "Nature",
            "Religion",
        ],
        subclasses: &["Abjurer", "Diviner", "Evoker", "Illusionist"],
        tools: &[],
        weapons: &["Simple"],
        armors: &[],
        features: &[
            (1, &["Arcane Recovery", "Ritual Adept", "Spellcasting"]),
            (2, &["Scholar"]),
            (3, &["Wizard Subclass"]),
            (4, &[ASI]),
            (5, &["Memorize Spell"]),
            (6, &[SUBCLASS_FEATURE]),
            (8, &[ASI]),
            (10, &[SUBCLASS_FEATURE]),
            (12, &[ASI]),
            (14, &[SUBCLASS_FEATURE]),
            (16, &[ASI]),
            (18, &["Spell Mastery"]),
            (19, &["Epic Boon"]),
            (20, &["Signature Spells"]),
        ],
    },
];
