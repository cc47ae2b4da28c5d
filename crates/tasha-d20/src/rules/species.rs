//! Playable species.

use super::Species;

/// All species, sorted by name.
pub const SPECIES: &[Species] = &[
    Species {
        name: "Aasimar",
        size: "Medium",
        speed: 30,
        traits: &[
            "Celestial Resistance",
            "Celestial Revelation",
            "Darkvision",
            "Healing Hands",
            "Light Bearer",
        ],
    },
    Species {
        name: "Dragonborn",
        size: "Medium",
        speed: 30,
        traits: &[
            "Breath Weapon",
            "Damage Resistance",
            "Darkvision",
            "Draconic Ancestry",
            "Draconic Flight",
        ],
    },
    Species {
        name: "Dwarf",
        size: "Medium",
        speed: 30,
        traits: &[
            "Darkvision",
            "Dwarven Resilience",
            "Dwarven Toughness",
            "Stonecunning",
        ],
    },
    Species {
        name: "Elf",
        size: "Medium",
        speed: 30,
        traits: &[
            "Darkvision",
            "Elven Lineage",
            "Fey Ancestry",
            "Keen Senses",
            "Trance",
        ],
    },
    Species {
        name: "Gnome",
        size: "Small",
        speed: 30,
        traits: &["Darkvision", "Gnomish Cunning", "Gnomish Lineage"],
    },
    Species {
        name: "Goliath",
        size: "Medium",
        speed: 35,
        traits: &["Giant Ancestry", "Large Form", "Powerful Build"],
    },
    Species {
        name: "Halfling",
        size: "Small",
        speed: 30,
        traits: &["Brave", "Halfling Nimbleness", "Luck", "Naturally Stealthy"],
    },
    Species {
        name: "Human",
        size: "Medium",
        speed: 30,
        traits: &["Resourceful", "Skillful", "Versatile"],
    },
    Species {
        name: "Orc",
        size: "Medium",
        speed: 30,
        traits: &["Adrenaline Rush", "Darkvision", "Relentless Endurance"],
    },
    Species {
        name: "Tiefling",
        size: "Medium",
        speed: 30,
        traits: &["Darkvision", "Fiendish Legacy", "Otherworldly Presence"],
    },
];
