//! Interactive character creation for tasha.
//!
//! A [`Wizard`] walks a [`Menu`] through species, background, ability
//! scores, classes and feats against a [`tasha_d20::Ruleset`], and produces
//! a [`CharacterRecord`] that is written once as TOML.

pub mod config;
pub mod error;
pub mod menu;
pub mod pipeline;
pub mod record;

pub use config::WizardConfig;
pub use error::{MenuError, MenuResult, WizardError, WizardResult};
pub use menu::{Menu, ScriptedMenu, TerminalMenu, remove_first};
pub use pipeline::Wizard;
pub use record::{CharacterRecord, ClassEntry, file_name_for};
