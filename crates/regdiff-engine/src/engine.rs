use tracing::{debug, info, warn};

use regdiff_diff::{diff_clauses_with, ClauseDiff};
use regdiff_types::{ClauseMap, ComparisonMode, IncompatibleReason, StandardIdentity};

use crate::classifier::classify;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::identifier::StandardIdentifier;
use crate::incompatible::IncompatibleComparison;
use crate::report::{ComparisonOutcome, CrossReferenceGuidance, VersionDiffReport};
use crate::segmenter::ClauseSegmenter;

// ---------------------------------------------------------------------------
// ComparisonEngine
// ---------------------------------------------------------------------------

/// Compares two editions of a standard and reports clause-level changes.
///
/// The engine owns its compiled patterns and holds no other state, so one
/// instance can serve any number of concurrent comparisons. Every call is
/// deterministic: identical inputs always produce identical output.
#[derive(Clone, Debug)]
pub struct ComparisonEngine {
    identifier: StandardIdentifier,
    segmenter: ClauseSegmenter,
    config: EngineConfig,
}

impl ComparisonEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        Ok(Self {
            identifier: StandardIdentifier::new()?,
            segmenter: ClauseSegmenter::new()?,
            config,
        })
    }

    /// The current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Identify the standard a document's text belongs to.
    pub fn identify(&self, text: &str) -> Option<StandardIdentity> {
        self.identifier.identify(text)
    }

    /// Segment a document's text into clauses.
    pub fn segment(&self, text: &str) -> ClauseMap {
        self.segmenter.segment(text)
    }

    /// Diff two clause maps with the configured line algorithm.
    pub fn diff(&self, old: &ClauseMap, new: &ClauseMap) -> ClauseDiff {
        diff_clauses_with(old, new, self.config.diff_algorithm)
    }

    /// Decide how two documents relate without diffing them.
    pub fn classify_texts(&self, old_text: &str, new_text: &str) -> ComparisonMode {
        classify(
            self.identify(old_text).as_ref(),
            self.identify(new_text).as_ref(),
        )
    }

    /// Compare two documents end to end.
    ///
    /// Editions of the same part produce a [`VersionDiffReport`], companion
    /// parts of one series produce [`CrossReferenceGuidance`]. Every other
    /// pairing fails with [`EngineError::Incompatible`].
    pub fn compare(&self, old_text: &str, new_text: &str) -> EngineResult<ComparisonOutcome> {
        let old_id = self.identify(old_text);
        let new_id = self.identify(new_text);
        let (old, new) = match (old_id, new_id) {
            (Some(old), Some(new)) => (old, new),
            (old_id, new_id) => {
                return Err(incompatible(IncompatibleReason::Unidentified, old_id, new_id))
            }
        };

        let mode = classify(Some(&old), Some(&new));
        info!(old = old.full_id(), new = new.full_id(), %mode, "classified comparison");

        match mode {
            ComparisonMode::VersionDiff => {
                let old_clauses = self.segment(old_text);
                let new_clauses = self.segment(new_text);
                debug!(
                    old_clauses = old_clauses.len(),
                    new_clauses = new_clauses.len(),
                    "segmented both editions"
                );

                let diff = self.diff(&old_clauses, &new_clauses);
                info!(
                    total = diff.len(),
                    added = diff.additions(),
                    modified = diff.modifications(),
                    deleted = diff.deletions(),
                    "version diff complete"
                );
                Ok(ComparisonOutcome::VersionDiff(VersionDiffReport::new(
                    &old, &new, diff,
                )))
            }
            ComparisonMode::CrossReference => Ok(ComparisonOutcome::CrossReference(
                CrossReferenceGuidance::new(&old, &new),
            )),
            ComparisonMode::Incompatible(reason) => {
                Err(incompatible(reason, Some(old), Some(new)))
            }
        }
    }
}

fn incompatible(
    reason: IncompatibleReason,
    old_id: Option<StandardIdentity>,
    new_id: Option<StandardIdentity>,
) -> EngineError {
    warn!(reason = reason.code(), "rejected incompatible comparison");
    EngineError::Incompatible(IncompatibleComparison::new(reason, old_id, new_id))
}
