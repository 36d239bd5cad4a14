//! Error types for the engine crate.

use crate::incompatible::IncompatibleComparison;

/// Errors surfaced by the comparison engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The two documents cannot be meaningfully compared.
    #[error("incompatible comparison: {}", .0.reason)]
    Incompatible(IncompatibleComparison),

    /// A built-in pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl EngineError {
    /// The incompatibility details, if this is an incompatible comparison.
    pub fn as_incompatible(&self) -> Option<&IncompatibleComparison> {
        match self {
            Self::Incompatible(details) => Some(details),
            Self::Pattern(_) => None,
        }
    }
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
