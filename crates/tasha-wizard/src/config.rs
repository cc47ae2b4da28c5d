//! Configuration for a wizard run.

use std::path::PathBuf;

/// Highest total character level.
pub const LEVEL_CAP: u32 = 20;

/// Configuration for one character build.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// RNG seed for reproducible ability scores. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Total level budget shared by all classes (1-20).
    pub max_level: u32,
    /// Directory the character file is written to.
    pub output_dir: PathBuf,
    /// Replace an existing character file.
    pub overwrite: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_level: LEVEL_CAP,
            output_dir: PathBuf::from("."),
            overwrite: false,
        }
    }
}

impl WizardConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the level budget (clamped to 1-20).
    pub fn with_max_level(mut self, level: u32) -> Self {
        self.max_level = level.clamp(1, LEVEL_CAP);
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Allow replacing an existing file.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = WizardConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.max_level, 20);
        assert_eq!(cfg.output_dir, PathBuf::from("."));
        assert!(!cfg.overwrite);
    }

    #[test]
    fn builder_methods() {
        let cfg = WizardConfig::default()
            .with_seed(7)
            .with_max_level(5)
            .with_output_dir("party")
            .with_overwrite(true);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.max_level, 5);
        assert_eq!(cfg.output_dir, PathBuf::from("party"));
        assert!(cfg.overwrite);
    }

    #[test]
    fn max_level_clamped() {
        assert_eq!(WizardConfig::default().with_max_level(0).max_level, 1);
        assert_eq!(WizardConfig::default().with_max_level(99).max_level, 20);
    }
}
