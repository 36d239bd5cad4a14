//! Standard identification from raw document text.

use regex::Regex;
use tracing::debug;

use regdiff_types::StandardIdentity;

use crate::error::EngineResult;

/// `ISO 10993-18:2020`. The year must not run on into further digits.
const COLON_FORM: &str = r"ISO\s*([0-9]+)-([0-9]+):([0-9]{4})(?:[^0-9]|$)";

/// `ISO 10993-18 (2020)`.
const PAREN_FORM: &str = r"ISO\s*([0-9]+)-([0-9]+)\s*\(([0-9]{4})\)";

/// Extracts a [`StandardIdentity`] from the full text of a document.
///
/// The colon form is tried across the whole text first; the parenthesised
/// form only if the colon form is absent. Within a pattern the first match
/// wins and later candidates are ignored.
#[derive(Clone, Debug)]
pub struct StandardIdentifier {
    patterns: [Regex; 2],
}

impl StandardIdentifier {
    /// Compile the identification patterns.
    pub fn new() -> EngineResult<Self> {
        Ok(Self {
            patterns: [Regex::new(COLON_FORM)?, Regex::new(PAREN_FORM)?],
        })
    }

    /// Identify the standard a document belongs to.
    ///
    /// Returns `None` when no pattern matches. That is a normal outcome for
    /// garbled or unrelated text, not an error.
    pub fn identify(&self, text: &str) -> Option<StandardIdentity> {
        let identity = self.patterns.iter().find_map(|pattern| {
            let caps = pattern.captures(text)?;
            StandardIdentity::new(&caps[1], &caps[2], &caps[3]).ok()
        });

        match &identity {
            Some(id) => debug!(standard = %id, "identified standard"),
            None => debug!(text_len = text.len(), "no standard identifier found"),
        }
        identity
    }
}
