//! The finished character and its TOML file.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tasha_d20::{Ability, AbilityScores};
use tracing::info;

use crate::error::{WizardError, WizardResult};

/// Levels and subclass taken in one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassEntry {
    /// Levels in this class.
    pub level: u32,
    /// Chosen subclass; empty below level 3.
    pub subclass: String,
    /// Hit die notation, e.g. `d6`.
    pub hit_die: String,
}

/// A completed character, ready to be written once.
///
/// Field order is the file order: scalars and lists first, then the
/// `ability_scores` and `classes` tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterRecord {
    /// Character name as entered.
    pub name: String,
    /// Species.
    pub species: String,
    /// Size category from the species.
    pub size: String,
    /// Walking speed in feet.
    pub speed: u32,
    /// Species traits.
    pub traits: Vec<String>,
    /// Gender.
    pub gender: String,
    /// Background.
    pub background: String,
    /// Total character level.
    pub level: u32,
    /// Saving throw proficiencies of the starting class.
    pub saving_throws: Vec<Ability>,
    /// Skill proficiencies.
    pub skills: BTreeSet<String>,
    /// Tool proficiencies.
    pub tools: BTreeSet<String>,
    /// Armor proficiencies.
    pub armors: BTreeSet<String>,
    /// Weapon proficiencies.
    pub weapons: BTreeSet<String>,
    /// Class features.
    pub features: BTreeSet<String>,
    /// Feats.
    pub feats: BTreeSet<String>,
    /// Final ability scores with modifiers.
    pub ability_scores: AbilityScores,
    /// Classes in the order they were taken; the first is the starting class.
    pub classes: IndexMap<String, ClassEntry>,
}

#[derive(Serialize)]
struct CharacterFile<'a> {
    character: &'a CharacterRecord,
}

/// File name for a character: trimmed, lowercased, spaces and path
/// separators as underscores.
pub fn file_name_for(name: &str) -> String {
    format!(
        "{}.toml",
        name.trim().to_lowercase().replace([' ', '/', '\\'], "_")
    )
}

impl CharacterRecord {
    /// The file name this character is saved under.
    pub fn file_name(&self) -> String {
        file_name_for(&self.name)
    }

    /// The starting class, if any class was taken.
    pub fn primary_class(&self) -> Option<&str> {
        self.classes.keys().next().map(String::as_str)
    }

    /// Encode the record as a TOML document with one `[character]` table.
    pub fn to_toml(&self) -> WizardResult<String> {
        Ok(toml::to_string(&CharacterFile { character: self })?)
    }

    /// Write the record into `dir`, returning the path written.
    ///
    /// The whole document is encoded before the file is touched.
    pub fn write_toml(&self, dir: &Path, overwrite: bool) -> WizardResult<PathBuf> {
        let path = dir.join(self.file_name());
        if !overwrite && path.exists() {
            return Err(WizardError::AlreadyExists(path));
        }
        let contents = self.to_toml()?;
        fs::write(&path, contents).map_err(|source| WizardError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), name = %self.name, "character written");
        Ok(path)
    }
}
