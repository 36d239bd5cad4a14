use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use regdiff_engine::EngineConfig;

/// Command-line configuration, optionally loaded from a TOML file.
///
/// ```toml
/// max_document_bytes = 8388608
/// column_width = 72
///
/// [engine]
/// diff_algorithm = "patience"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Documents larger than this are refused before the engine sees them.
    pub max_document_bytes: u64,
    /// Width of each column in the side-by-side view.
    pub column_width: usize,
    pub engine: EngineConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: 16 * 1024 * 1024,
            column_width: 60,
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }
}
