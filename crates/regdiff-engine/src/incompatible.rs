//! Details and remediation text for rejected comparisons.

use serde::{Deserialize, Serialize};

use regdiff_types::{IncompatibleReason, StandardIdentity};

/// Comparisons that always make sense.
const VALID_EXAMPLES: &[&str] = &[
    "ISO 10993-18:2005 vs ISO 10993-18:2020 (two editions of the same part)",
    "ISO 11135-1:2007 vs ISO 11135-1:2014 (two editions of the same part)",
    "ISO 10993-17:2023 vs ISO 10993-18:2020 (companion parts: returns cross-reference guidance instead of a diff)",
];

/// Comparisons that are always rejected.
const INVALID_EXAMPLES: &[&str] = &[
    "ISO 10993-18:2020 vs ISO 10993-18:2020 (the same edition uploaded twice)",
    "ISO 10993-18:2020 vs ISO 11135-1:2014 (different standard series)",
    "A scanned document with no readable standard identifier vs any standard",
];

/// Structured description of why two documents cannot be compared.
///
/// `message` is end-user prose explaining the problem and how to fix it;
/// callers should show it as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncompatibleComparison {
    pub reason: IncompatibleReason,
    pub old_standard: Option<StandardIdentity>,
    pub new_standard: Option<StandardIdentity>,
    pub message: String,
    pub valid_examples: Vec<String>,
    pub invalid_examples: Vec<String>,
}

impl IncompatibleComparison {
    /// Build the details for `reason`, given whatever identities were found.
    pub fn new(
        reason: IncompatibleReason,
        old_standard: Option<StandardIdentity>,
        new_standard: Option<StandardIdentity>,
    ) -> Self {
        let message = remediation(reason, old_standard.as_ref(), new_standard.as_ref());
        Self {
            reason,
            old_standard,
            new_standard,
            message,
            valid_examples: VALID_EXAMPLES.iter().map(|s| s.to_string()).collect(),
            invalid_examples: INVALID_EXAMPLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn remediation(
    reason: IncompatibleReason,
    old: Option<&StandardIdentity>,
    new: Option<&StandardIdentity>,
) -> String {
    match (reason, old, new) {
        (IncompatibleReason::DuplicateUpload, Some(id), _) => format!(
            "Both documents are {id}. Comparing an edition with itself cannot show any changes.\n\
             \n\
             Upload the earlier and the later edition of the same part, for example \
             ISO {series}-{part} as published in two different years.",
            series = id.series(),
            part = id.part(),
        ),
        (IncompatibleReason::DifferentSeries, Some(a), Some(b)) => format!(
            "The documents belong to different standards: {a} and {b}.\n\
             \n\
             A version comparison only makes sense between two editions of the same part \
             of the same standard. Clause numbers in unrelated standards do not correspond, \
             so a diff would report changes that do not exist. Upload two editions of \
             {a_base} or two editions of {b_base} instead.",
            a_base = format!("ISO {}-{}", a.series(), a.part()),
            b_base = format!("ISO {}-{}", b.series(), b.part()),
        ),
        _ => {
            let which = match (old, new) {
                (None, None) => "either document",
                (None, Some(_)) => "the old document",
                (Some(_), None) => "the new document",
                (Some(_), Some(_)) => "one of the documents",
            };
            format!(
                "We could not find an ISO standard identifier in {which}.\n\
                 \n\
                 The identifier is read from the document text and must look like \
                 \"ISO 10993-18:2020\" or \"ISO 10993-18 (2020)\". Check that the file is the \
                 standard itself rather than a cover page or summary, and that its text can be \
                 selected rather than being a scanned image."
            )
        }
    }
}
