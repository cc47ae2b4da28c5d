//! Error types for the character wizard.

use std::path::PathBuf;

use tasha_d20::D20Error;
use thiserror::Error;

/// Result type for wizard operations.
pub type WizardResult<T> = Result<T, WizardError>;

/// Result type for menu prompts.
pub type MenuResult<T> = Result<T, MenuError>;

/// Errors raised while asking the user a question.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Input ended before an answer was given.
    #[error("input closed before a choice was made")]
    Closed,

    /// Reading input or writing the prompt failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// A prompt was raised with nothing to choose from.
    #[error("no options available for '{0}'")]
    NoOptions(String),

    /// A scripted answer was not among the options offered.
    #[error("'{answer}' is not an option for '{label}'")]
    NotOffered {
        /// The prompt label.
        label: String,
        /// The rejected answer.
        answer: String,
    },

    /// A scripted menu ran out of answers.
    #[error("no answer left for '{0}'")]
    Exhausted(String),
}

/// Errors that can occur while building or saving a character.
#[derive(Debug, Error)]
pub enum WizardError {
    /// A prompt could not be answered.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// A choice did not resolve against the ruleset.
    #[error(transparent)]
    Rules(#[from] D20Error),

    /// The record could not be encoded.
    #[error("failed to encode character: {0}")]
    Encode(#[from] toml::ser::Error),

    /// Writing the character file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// The file being written.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The character file exists and overwriting was not requested.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}
