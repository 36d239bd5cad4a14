use std::fmt;

use serde::{Deserialize, Serialize};

/// How a pair of documents may be compared.
///
/// Derived per call from the two documents' identities; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "mode", content = "reason")]
pub enum ComparisonMode {
    /// Two editions of the same part of the same series.
    VersionDiff,
    /// Two different parts of the same multi-part series.
    CrossReference,
    /// No meaningful comparison exists.
    Incompatible(IncompatibleReason),
}

impl ComparisonMode {
    /// Returns `true` for [`ComparisonMode::Incompatible`].
    pub fn is_incompatible(&self) -> bool {
        matches!(self, Self::Incompatible(_))
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VersionDiff => f.write_str("version diff"),
            Self::CrossReference => f.write_str("cross reference"),
            Self::Incompatible(reason) => write!(f, "incompatible ({reason})"),
        }
    }
}

/// Why a comparison was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncompatibleReason {
    /// A standard could not be identified in one or both documents.
    Unidentified,
    /// Both documents are the same series, part and year.
    DuplicateUpload,
    /// The documents belong to different standard series.
    DifferentSeries,
}

impl IncompatibleReason {
    /// Machine-readable code, matching the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unidentified => "UNIDENTIFIED",
            Self::DuplicateUpload => "DUPLICATE_UPLOAD",
            Self::DifferentSeries => "DIFFERENT_SERIES",
        }
    }
}

impl fmt::Display for IncompatibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unidentified => "could not identify a standard in one or both documents",
            Self::DuplicateUpload => "both documents are the same edition of the same standard",
            Self::DifferentSeries => "the documents belong to different standard series",
        };
        f.write_str(text)
    }
}
