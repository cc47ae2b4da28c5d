//! Error types for the rules engine.

/// Errors that can occur while resolving rules data.
#[derive(Debug, thiserror::Error)]
pub enum D20Error {
    /// An ability name did not match any of the six abilities.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// A class name is not in the ruleset.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// A background name is not in the ruleset.
    #[error("unknown background: {0}")]
    UnknownBackground(String),

    /// A species name is not in the ruleset.
    #[error("unknown species: {0}")]
    UnknownSpecies(String),
}

/// Convenience result type for rules operations.
pub type D20Result<T> = Result<T, D20Error>;
