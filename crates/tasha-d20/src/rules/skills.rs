//! Skills and their governing abilities.

use super::Skill;
use crate::ability::Ability;

/// All eighteen skills, sorted by name.
pub const SKILLS: &[Skill] = &[
    Skill { name: "Acrobatics", ability: Ability::Dexterity },
    Skill { name: "Animal Handling", ability: Ability::Wisdom },
    Skill { name: "Arcana", ability: Ability::Intelligence },
    Skill { name: "Athletics", ability: Ability::Strength },
    Skill { name: "Deception", ability: Ability::Charisma },
    Skill { name: "History", ability: Ability::Intelligence },
    Skill { name: "Insight", ability: Ability::Wisdom },
    Skill { name: "Intimidation", ability: Ability::Charisma },
    Skill { name: "Investigation", ability: Ability::Intelligence },
    Skill { name: "Medicine", ability: Ability::Wisdom },
    Skill { name: "Nature", ability: Ability::Intelligence },
    Skill { name: "Perception", ability: Ability::Wisdom },
    Skill { name: "Performance", ability: Ability::Charisma },
    Skill { name: "Persuasion", ability: Ability::Charisma },
    Skill { name: "Religion", ability: Ability::Intelligence },
    Skill { name: "Sleight of Hand", ability: Ability::Dexterity },
    Skill { name: "Stealth", ability: Ability::Dexterity },
    Skill { name: "Survival", ability: Ability::Wisdom },
];
