//! Success payloads returned by the comparison engine.

use serde::{Deserialize, Serialize};

use regdiff_diff::ClauseDiff;
use regdiff_types::{ComparisonMode, Delta, StandardIdentity};

/// The successful result of comparing two documents.
///
/// Serialized with an `analysisType` tag of `VERSION_DIFF` or
/// `CROSS_REFERENCE`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "analysisType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonOutcome {
    VersionDiff(VersionDiffReport),
    CrossReference(CrossReferenceGuidance),
}

impl ComparisonOutcome {
    /// The comparison mode that produced this outcome.
    pub fn mode(&self) -> ComparisonMode {
        match self {
            Self::VersionDiff(_) => ComparisonMode::VersionDiff,
            Self::CrossReference(_) => ComparisonMode::CrossReference,
        }
    }

    /// The diff report, if this is a version diff.
    pub fn as_version_diff(&self) -> Option<&VersionDiffReport> {
        match self {
            Self::VersionDiff(report) => Some(report),
            Self::CrossReference(_) => None,
        }
    }

    /// The guidance, if this is a cross-reference.
    pub fn as_cross_reference(&self) -> Option<&CrossReferenceGuidance> {
        match self {
            Self::CrossReference(guidance) => Some(guidance),
            Self::VersionDiff(_) => None,
        }
    }
}

/// Clause-level changes between two editions of one standard part.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDiffReport {
    pub old_standard_id: String,
    pub new_standard_id: String,
    pub old_year: String,
    pub new_year: String,
    pub total_changes: usize,
    pub summary: DiffSummary,
    /// In ascending lexicographic clause id order.
    pub deltas: Vec<Delta>,
}

impl VersionDiffReport {
    pub fn new(old: &StandardIdentity, new: &StandardIdentity, diff: ClauseDiff) -> Self {
        let summary = DiffSummary::from(&diff);
        let deltas = diff.into_deltas();
        Self {
            old_standard_id: old.full_id().to_string(),
            new_standard_id: new.full_id().to_string(),
            old_year: old.year().to_string(),
            new_year: new.year().to_string(),
            total_changes: deltas.len(),
            summary,
            deltas,
        }
    }
}

/// Per-type counts of clause changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub modified: usize,
    pub deleted: usize,
}

impl From<&ClauseDiff> for DiffSummary {
    fn from(diff: &ClauseDiff) -> Self {
        Self {
            added: diff.additions(),
            modified: diff.modifications(),
            deleted: diff.deletions(),
        }
    }
}

/// Explanation returned when two documents are companion parts of one
/// series. No diff is performed for these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReferenceGuidance {
    pub series: String,
    pub first_standard_id: String,
    pub second_standard_id: String,
    pub first_part: String,
    pub second_part: String,
    pub relationship: String,
    pub message: String,
    pub suggestions: Vec<String>,
}

impl CrossReferenceGuidance {
    pub fn new(first: &StandardIdentity, second: &StandardIdentity) -> Self {
        let series = first.series();
        let (p1, p2) = (first.part(), second.part());

        let relationship = format!(
            "ISO {series}-{p1} and ISO {series}-{p2} are companion parts of the ISO {series} \
             series. Each part is revised on its own schedule, so their clause numbers do not \
             refer to the same requirements."
        );
        let message = format!(
            "{first} and {second} are different parts of the same standard series, not two \
             editions of one part. A clause-by-clause diff would pair unrelated clauses that \
             happen to share a number, so no diff was performed."
        );
        let suggestions = vec![
            format!("To see what changed in part {p1}, compare {first} with another edition of ISO {series}-{p1}."),
            format!("To see what changed in part {p2}, compare {second} with another edition of ISO {series}-{p2}."),
            format!("Read the normative references of each part to find where part {p1} and part {p2} depend on each other."),
            "If both parts apply to your product, run a separate gap analysis against each one.".to_string(),
        ];

        Self {
            series: series.to_string(),
            first_standard_id: first.full_id().to_string(),
            second_standard_id: second.full_id().to_string(),
            first_part: p1.to_string(),
            second_part: p2.to_string(),
            relationship,
            message,
            suggestions,
        }
    }
}
