//! Clause-level diff: compare two clause maps.
//!
//! Walks the union of both clause id sets in ascending lexicographic order.
//! Ids present only in `new` are `Added`, ids present only in `old` are
//! `Deleted`, and ids present in both with differing text are `Modified`.
//! Unchanged clauses produce nothing. A clause with empty text counts as
//! absent.

use std::collections::BTreeSet;

use regdiff_types::{ChangeType, ClauseMap, Delta};

use crate::line_diff::{diff_lines, DiffAlgorithm};

/// The result of comparing two clause maps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClauseDiff {
    /// Deltas in ascending lexicographic clause id order.
    pub deltas: Vec<Delta>,
}

impl ClauseDiff {
    /// Create an empty clause diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Number of added clauses.
    pub fn additions(&self) -> usize {
        self.count(ChangeType::Added)
    }

    /// Number of modified clauses.
    pub fn modifications(&self) -> usize {
        self.count(ChangeType::Modified)
    }

    /// Number of deleted clauses.
    pub fn deletions(&self) -> usize {
        self.count(ChangeType::Deleted)
    }

    /// Consume the diff, returning the ordered deltas.
    pub fn into_deltas(self) -> Vec<Delta> {
        self.deltas
    }

    fn count(&self, change_type: ChangeType) -> usize {
        self.deltas
            .iter()
            .filter(|d| d.change_type == change_type)
            .count()
    }
}

/// Compute the clause-level diff using the default line algorithm.
pub fn diff_clauses(old: &ClauseMap, new: &ClauseMap) -> ClauseDiff {
    diff_clauses_with(old, new, DiffAlgorithm::default())
}

/// Compute the clause-level diff, aligning modified clauses with `algorithm`.
pub fn diff_clauses_with(old: &ClauseMap, new: &ClauseMap, algorithm: DiffAlgorithm) -> ClauseDiff {
    let ids: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

    let deltas = ids
        .into_iter()
        .filter_map(|id| match (clause_text(old, id), clause_text(new, id)) {
            (None, Some(new_text)) => Some(Delta::added(id.as_str(), new_text.as_str())),
            (Some(old_text), None) => Some(Delta::deleted(id.as_str(), old_text.as_str())),
            (Some(old_text), Some(new_text)) if old_text != new_text => Some(Delta::modified(
                id.as_str(),
                old_text.as_str(),
                new_text.as_str(),
                diff_lines(old_text, new_text, algorithm),
            )),
            _ => None,
        })
        .collect();

    ClauseDiff { deltas }
}

fn clause_text<'m>(clauses: &'m ClauseMap, id: &str) -> Option<&'m String> {
    clauses.get(id).filter(|text| !text.is_empty())
}
