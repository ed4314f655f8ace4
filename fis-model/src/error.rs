use thiserror::Error;

use crate::variable::Role;

/// Errors surfaced by model mutations. The model rejects invalid input at the
/// point of violation; it never clamps or coerces.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A variable range where the minimum is not strictly below the maximum.
    #[error("range minimum {min} must be strictly less than maximum {max}")]
    InvalidRange { min: f64, max: f64 },

    /// An index-bounded replace/remove addressed a slot that does not exist.
    /// This is a caller programming error, not a recoverable condition.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A membership function name that is already taken within its variable.
    #[error("membership function '{name}' already exists in this variable")]
    DuplicateName { name: String },

    /// A rule whose term count does not line up with the document's variables.
    #[error("rule carries {found} {role} terms but the document declares {expected} {role} variables")]
    RuleArity {
        role: Role,
        expected: usize,
        found: usize,
    },
}
