//! The character creation pipeline.
//!
//! Steps run strictly forward: species, gender, background, ability scores,
//! the background bonus, one or more classes, then one choice per Ability
//! Score Improvement slot. The only loop is "add another class". A failed
//! prompt aborts the whole build.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tasha_d20::{Ability, AbilityScores, D20Error, FeatContext, Ruleset, generate_scores};
use tracing::debug;

use crate::config::WizardConfig;
use crate::error::WizardResult;
use crate::menu::{Menu, remove_first};
use crate::record::{CharacterRecord, ClassEntry};

/// Gender options.
pub const GENDERS: &[&str] = &["Female", "Male"];

/// Background bonus: +2 to one ability and +1 to another.
pub const BONUS_TWO_ONE: &str = "2/1";
/// Background bonus: +1 to each of the three abilities.
pub const BONUS_ONE_ONE_ONE: &str = "1/1/1";

/// Improvement slot spent on a feat.
pub const ADD_FEAT: &str = "Add a feat";
/// Improvement slot spent on ability scores.
pub const UPGRADE_ABILITIES: &str = "Upgrade abilities";

/// Ability upgrade: +2 to one ability.
pub const PLUS_TWO: &str = "+2 to one ability";
/// Ability upgrade: +1 to two different abilities.
pub const PLUS_ONE_TWICE: &str = "+1 to two abilities";

/// Class level from which a subclass is chosen.
pub const SUBCLASS_LEVEL: u32 = 3;

/// Drives the menu through every step and assembles the record.
pub struct Wizard<M> {
    rules: Ruleset,
    config: WizardConfig,
    menu: M,
}

impl<M: Menu> Wizard<M> {
    /// Create a wizard over a ruleset, configuration, and menu.
    pub fn new(rules: Ruleset, config: WizardConfig, menu: M) -> Self {
        Self {
            rules,
            config,
            menu,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// The menu.
    pub fn menu(&self) -> &M {
        &self.menu
    }

    /// Roll ability scores and build a character called `name`.
    pub fn run(&mut self, name: &str) -> WizardResult<CharacterRecord> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let generated = generate_scores(&mut rng);
        debug!(
            scores = ?generated.scores,
            attempts = generated.attempts,
            "ability scores generated"
        );
        self.build(name, &generated.scores)
    }

    /// Build a character from a given pool of ability scores.
    pub fn build(&mut self, name: &str, scores: &[i32]) -> WizardResult<CharacterRecord> {
        let mut draft = Draft {
            name: name.to_string(),
            ..Draft::default()
        };
        self.choose_species(&mut draft)?;
        draft.gender = self.menu.select("Choose a gender", GENDERS)?;
        self.choose_background(&mut draft)?;
        self.assign_scores(&mut draft, scores)?;
        self.apply_background_bonus(&mut draft)?;
        self.choose_classes(&mut draft)?;
        self.spend_improvements(&mut draft)?;
        Ok(draft.finish())
    }

    /// Write a record using the configured directory and overwrite policy.
    pub fn save(&self, record: &CharacterRecord) -> WizardResult<std::path::PathBuf> {
        record.write_toml(&self.config.output_dir, self.config.overwrite)
    }

    fn choose_species(&mut self, draft: &mut Draft) -> WizardResult<()> {
        let name = self
            .menu
            .select("Choose a species", &self.rules.species_names())?;
        let species = self
            .rules
            .species(&name)
            .ok_or_else(|| D20Error::UnknownSpecies(name.clone()))?;
        draft.size = species.size.to_string();
        draft.speed = species.speed;
        draft.traits = species.traits.iter().map(|t| t.to_string()).collect();
        debug!(species = %name, "species chosen");
        draft.species = name;
        Ok(())
    }

    fn choose_background(&mut self, draft: &mut Draft) -> WizardResult<()> {
        let name = self
            .menu
            .select("Choose a background", &self.rules.background_names())?;
        let background = self
            .rules
            .background(&name)
            .ok_or_else(|| D20Error::UnknownBackground(name.clone()))?;
        draft
            .skills
            .extend(background.skills.iter().map(|s| s.to_string()));
        draft
            .feats
            .extend(background.feats.iter().map(|f| f.to_string()));
        match background.tools {
            [] => {}
            [tool] => {
                draft.tools.insert(tool.to_string());
            }
            tools => {
                let tool = self.menu.select("Choose a background tool", tools)?;
                draft.tools.insert(tool);
            }
        }
        debug!(background = %name, "background chosen");
        draft.background = name;
        Ok(())
    }

    fn assign_scores(&mut self, draft: &mut Draft, scores: &[i32]) -> WizardResult<()> {
        let mut pool = scores.to_vec();
        for ability in Ability::ALL {
            let label = format!("Assign a score to {ability}");
            let value = self.menu.select_number(&label, &pool)?;
            remove_first(&mut pool, &value);
            draft.scores.set(ability, value);
        }
        Ok(())
    }

    fn apply_background_bonus(&mut self, draft: &mut Draft) -> WizardResult<()> {
        let abilities = self.rules.abilities_by_background(&draft.background);
        let plan = self.menu.select(
            "Choose a background bonus",
            &[BONUS_TWO_ONE, BONUS_ONE_ONE_ONE],
        )?;
        if plan == BONUS_TWO_ONE {
            let mut options: Vec<&str> = abilities.iter().map(|a| a.name()).collect();
            let first = self.menu.select("Choose an ability to raise by 2", &options)?;
            remove_first(&mut options, &first);
            let second = self.menu.select("Choose an ability to raise by 1", &options)?;
            draft.scores.increase(first.parse()?, 2);
            draft.scores.increase(second.parse()?, 1);
        } else {
            for ability in abilities {
                draft.scores.increase(*ability, 1);
            }
        }
        debug!(plan = %plan, "background bonus applied");
        Ok(())
    }

    fn choose_classes(&mut self, draft: &mut Draft) -> WizardResult<()> {
        let mut remaining = self.config.max_level;
        let mut pool = self.rules.class_names();
        loop {
            let is_primary = draft.classes.is_empty();
            let label = if is_primary {
                "Choose a class"
            } else {
                "Choose a class to add"
            };
            let class = self.menu.select(label, &pool)?;
            let definition = self
                .rules
                .class(&class)
                .ok_or_else(|| D20Error::UnknownClass(class.clone()))?;

            let level = self.menu.select_number(
                &format!("Choose a {class} level"),
                &Ruleset::levels(remaining),
            )?;
            remaining -= level;

            let subclass = if level >= SUBCLASS_LEVEL && !definition.subclasses.is_empty() {
                self.menu
                    .select(&format!("Choose a {class} subclass"), definition.subclasses)?
            } else {
                String::new()
            };

            if is_primary {
                draft.saving_throws = self.rules.saving_throws_by_class(&class).to_vec();
            }
            draft.armors.extend(
                self.rules
                    .armors_by_class(&class, is_primary)
                    .iter()
                    .map(|a| a.to_string()),
            );
            draft.weapons.extend(
                self.rules
                    .weapons_by_class(&class, is_primary)
                    .iter()
                    .map(|w| w.to_string()),
            );
            draft.features.extend(
                self.rules
                    .features_by_class(&class, level)
                    .into_iter()
                    .map(str::to_string),
            );
            let slots = self.rules.ability_score_improvements(&class, level);
            draft.improvement_slots += slots;

            self.choose_class_skills(draft, &class, is_primary)?;
            self.choose_class_tools(draft, &class, is_primary)?;

            debug!(
                class = %class,
                level,
                subclass = %subclass,
                primary = is_primary,
                improvement_slots = slots,
                "class added"
            );
            draft.classes.insert(
                class,
                ClassEntry {
                    level,
                    subclass,
                    hit_die: definition.hit_die.to_string(),
                },
            );

            let chosen: Vec<&str> = draft.classes.keys().map(String::as_str).collect();
            pool = self.rules.multiclass_options(&draft.scores, &chosen);
            if remaining == 0 || pool.is_empty() {
                break;
            }
            if !self.menu.confirm("Add another class?")? {
                break;
            }
        }
        Ok(())
    }

    fn choose_class_skills(
        &mut self,
        draft: &mut Draft,
        class: &str,
        is_primary: bool,
    ) -> WizardResult<()> {
        let points = self.rules.skill_points_by_class(class, is_primary);
        let candidates: Vec<&str> = self
            .rules
            .skills_by_class(class)
            .iter()
            .copied()
            .filter(|s| !draft.skills.contains(*s))
            .collect();
        pick_many(
            &mut self.menu,
            &format!("{class} skill"),
            candidates,
            points,
            &mut draft.skills,
        )
    }

    fn choose_class_tools(
        &mut self,
        draft: &mut Draft,
        class: &str,
        is_primary: bool,
    ) -> WizardResult<()> {
        let tools = self.rules.tools_by_class(class, is_primary);
        let picks = self.rules.tool_picks_by_class(class, is_primary);
        if picks == 0 {
            draft.tools.extend(tools.iter().map(|t| t.to_string()));
            return Ok(());
        }
        let candidates: Vec<&str> = tools
            .iter()
            .copied()
            .filter(|t| !draft.tools.contains(*t))
            .collect();
        pick_many(
            &mut self.menu,
            &format!("{class} tool"),
            candidates,
            picks,
            &mut draft.tools,
        )
    }

    fn spend_improvements(&mut self, draft: &mut Draft) -> WizardResult<()> {
        let slots = draft.improvement_slots;
        for slot in 1..=slots {
            let feats = self.eligible_feats(draft);
            let upgrades = upgrade_options(&draft.scores);

            let mut choices = Vec::new();
            if !feats.is_empty() {
                choices.push(ADD_FEAT);
            }
            if !upgrades.is_empty() {
                choices.push(UPGRADE_ABILITIES);
            }
            if choices.is_empty() {
                self.menu.notify("No feats or ability upgrades are available.")?;
                break;
            }

            let label = format!("Ability Score Improvement ({slot} of {slots})");
            if self.menu.select(&label, &choices)? == ADD_FEAT {
                let feat = self.menu.select("Choose a feat", &feats)?;
                debug!(feat = %feat, "feat taken");
                draft.feats.insert(feat);
            } else {
                self.upgrade_abilities(draft, &upgrades)?;
            }
        }
        Ok(())
    }

    fn eligible_feats(&self, draft: &Draft) -> Vec<&'static str> {
        let ctx = FeatContext {
            scores: &draft.scores,
            level: draft.total_level(),
            features: &draft.features,
            armors: &draft.armors,
            known_feats: &draft.feats,
        };
        self.rules.eligible_feats(&ctx)
    }

    fn upgrade_abilities(&mut self, draft: &mut Draft, upgrades: &[&str]) -> WizardResult<()> {
        let plan = self.menu.select("Choose an ability upgrade", upgrades)?;
        if plan == PLUS_TWO {
            let options = raisable(&draft.scores, 2);
            let ability = self.menu.select("Choose an ability to raise by 2", &options)?;
            draft.scores.increase(ability.parse()?, 2);
        } else {
            let mut options = raisable(&draft.scores, 1);
            let first = self
                .menu
                .select("Choose the first ability to raise by 1", &options)?;
            remove_first(&mut options, &first);
            let second = self
                .menu
                .select("Choose the second ability to raise by 1", &options)?;
            draft.scores.increase(first.parse()?, 1);
            draft.scores.increase(second.parse()?, 1);
        }
        debug!(plan = %plan, "abilities upgraded");
        Ok(())
    }
}

/// Let the menu pick up to `count` entries from `candidates` into `held`.
fn pick_many<M: Menu>(
    menu: &mut M,
    what: &str,
    mut candidates: Vec<&str>,
    count: usize,
    held: &mut BTreeSet<String>,
) -> WizardResult<()> {
    for pick in 1..=count {
        if candidates.is_empty() {
            menu.notify(&format!("No {what} options left."))?;
            break;
        }
        let label = format!("Choose a {what} ({pick} of {count})");
        let choice = menu.select(&label, &candidates)?;
        remove_first(&mut candidates, &choice);
        held.insert(choice);
    }
    Ok(())
}

/// Upgrade plans the scores can still take.
fn upgrade_options(scores: &AbilityScores) -> Vec<&'static str> {
    let mut options = Vec::new();
    if !raisable(scores, 2).is_empty() {
        options.push(PLUS_TWO);
    }
    if raisable(scores, 1).len() >= 2 {
        options.push(PLUS_ONE_TWICE);
    }
    options
}

/// Names of abilities that can take `bonus` without passing the cap.
fn raisable(scores: &AbilityScores, bonus: i32) -> Vec<&'static str> {
    Ability::ALL
        .into_iter()
        .filter(|a| scores.can_increase(*a, bonus))
        .map(Ability::name)
        .collect()
}

/// Selections accumulated while the pipeline runs.
#[derive(Debug, Default)]
struct Draft {
    name: String,
    species: String,
    size: String,
    speed: u32,
    traits: Vec<String>,
    gender: String,
    background: String,
    scores: AbilityScores,
    saving_throws: Vec<Ability>,
    classes: IndexMap<String, ClassEntry>,
    skills: BTreeSet<String>,
    tools: BTreeSet<String>,
    armors: BTreeSet<String>,
    weapons: BTreeSet<String>,
    features: BTreeSet<String>,
    feats: BTreeSet<String>,
    improvement_slots: usize,
}

impl Draft {
    fn total_level(&self) -> u32 {
        self.classes.values().map(|c| c.level).sum()
    }

    fn finish(self) -> CharacterRecord {
        let level = self.total_level();
        CharacterRecord {
            name: self.name,
            species: self.species,
            size: self.size,
            speed: self.speed,
            traits: self.traits,
            gender: self.gender,
            background: self.background,
            level,
            saving_throws: self.saving_throws,
            skills: self.skills,
            tools: self.tools,
            armors: self.armors,
            weapons: self.weapons,
            features: self.features,
            feats: self.feats,
            ability_scores: self.scores,
            classes: self.classes,
        }
    }
}
