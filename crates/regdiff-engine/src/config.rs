use serde::{Deserialize, Serialize};

use regdiff_diff::DiffAlgorithm;

/// Configuration for the comparison engine.
///
/// The engine imposes no size or time budget of its own; callers handling
/// untrusted uploads bound their inputs before calling it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Line alignment algorithm for modified clauses.
    pub diff_algorithm: DiffAlgorithm,
}

impl EngineConfig {
    /// Use a specific line alignment algorithm.
    pub fn with_algorithm(algorithm: DiffAlgorithm) -> Self {
        Self {
            diff_algorithm: algorithm,
        }
    }
}
