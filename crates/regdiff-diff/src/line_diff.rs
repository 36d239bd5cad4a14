//! Line-level diff: row-by-row comparison of two clause texts.
//!
//! Uses the `similar` crate to align lines, then flattens the resulting ops
//! into side-by-side rows. Replaced regions are paired line for line; any
//! surplus on either side becomes plain deletes or inserts.

use serde::{Deserialize, Serialize};
use similar::{Algorithm, DiffTag, TextDiff};

use regdiff_types::{LineChange, LineDiff};

/// Line alignment algorithm used for modified clauses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

/// Compute a line-by-line diff between two texts.
///
/// Lines are split on `'\n'` only, so joining either side of the result
/// with `'\n'` reproduces the input exactly.
pub fn diff_lines(old: &str, new: &str, algorithm: DiffAlgorithm) -> LineDiff {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();

    let text_diff = TextDiff::configure()
        .algorithm(algorithm.into())
        .diff_slices(old_lines.as_slice(), new_lines.as_slice());

    let mut lines = Vec::with_capacity(old_lines.len().max(new_lines.len()));

    for op in text_diff.ops() {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                lines.extend(old_lines[old_range].iter().map(|l| LineChange::equal(*l)));
            }
            DiffTag::Delete => {
                lines.extend(old_lines[old_range].iter().map(|l| LineChange::delete(*l)));
            }
            DiffTag::Insert => {
                lines.extend(new_lines[new_range].iter().map(|l| LineChange::insert(*l)));
            }
            DiffTag::Replace => {
                let old_side = &old_lines[old_range];
                let new_side = &new_lines[new_range];
                let paired = old_side.len().min(new_side.len());

                for (o, n) in old_side.iter().zip(new_side) {
                    lines.push(LineChange::replace(*o, *n));
                }
                lines.extend(old_side[paired..].iter().map(|l| LineChange::delete(*l)));
                lines.extend(new_side[paired..].iter().map(|l| LineChange::insert(*l)));
            }
        }
    }

    LineDiff { lines }
}
