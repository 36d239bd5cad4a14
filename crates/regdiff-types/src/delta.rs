//! Clause-level change records and their line-level diff representation.

use serde::{Deserialize, Serialize};

/// The kind of change a [`Delta`] records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    /// The clause exists only in the new edition.
    Added,
    /// The clause exists in both editions with different text.
    Modified,
    /// The clause exists only in the old edition.
    Deleted,
}

impl ChangeType {
    /// Upper-case label used in payloads and terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Added => "ADDED",
            Self::Modified => "MODIFIED",
            Self::Deleted => "DELETED",
        }
    }
}

/// A single clause-level change between two editions of a standard.
///
/// Construct through [`Delta::added`], [`Delta::deleted`] or
/// [`Delta::modified`]; those keep `old_text`/`new_text` consistent with the
/// change type and fill in `change_text`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delta {
    pub clause_id: String,
    pub change_type: ChangeType,
    pub old_text: String,
    pub new_text: String,
    /// The latest content of the clause: `new_text`, or `old_text` for deletions.
    pub change_text: String,
    /// Present only for [`ChangeType::Modified`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_representation: Option<LineDiff>,
}

impl Delta {
    /// A clause that appears only in the new edition.
    pub fn added(clause_id: impl Into<String>, new_text: impl Into<String>) -> Self {
        let new_text = new_text.into();
        Self {
            clause_id: clause_id.into(),
            change_type: ChangeType::Added,
            old_text: String::new(),
            change_text: new_text.clone(),
            new_text,
            diff_representation: None,
        }
    }

    /// A clause that appears only in the old edition.
    pub fn deleted(clause_id: impl Into<String>, old_text: impl Into<String>) -> Self {
        let old_text = old_text.into();
        Self {
            clause_id: clause_id.into(),
            change_type: ChangeType::Deleted,
            change_text: old_text.clone(),
            old_text,
            new_text: String::new(),
            diff_representation: None,
        }
    }

    /// A clause present in both editions whose text changed.
    pub fn modified(
        clause_id: impl Into<String>,
        old_text: impl Into<String>,
        new_text: impl Into<String>,
        diff: LineDiff,
    ) -> Self {
        let new_text = new_text.into();
        Self {
            clause_id: clause_id.into(),
            change_type: ChangeType::Modified,
            old_text: old_text.into(),
            change_text: new_text.clone(),
            new_text,
            diff_representation: Some(diff),
        }
    }
}

/// Operation tag for one row of a [`LineDiff`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineOp {
    /// The line is unchanged.
    Equal,
    /// The line exists only in the old text.
    Delete,
    /// The line exists only in the new text.
    Insert,
    /// An old line was replaced by a new one at the same position.
    Replace,
}

/// One row of a side-by-side line diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChange {
    pub op: LineOp,
    pub old_line: Option<String>,
    pub new_line: Option<String>,
}

impl LineChange {
    pub fn equal(line: impl Into<String>) -> Self {
        let line = line.into();
        Self {
            op: LineOp::Equal,
            old_line: Some(line.clone()),
            new_line: Some(line),
        }
    }

    pub fn delete(line: impl Into<String>) -> Self {
        Self {
            op: LineOp::Delete,
            old_line: Some(line.into()),
            new_line: None,
        }
    }

    pub fn insert(line: impl Into<String>) -> Self {
        Self {
            op: LineOp::Insert,
            old_line: None,
            new_line: Some(line.into()),
        }
    }

    pub fn replace(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            op: LineOp::Replace,
            old_line: Some(old.into()),
            new_line: Some(new.into()),
        }
    }
}

/// An ordered line-level diff between two clause texts.
///
/// Rows are in document order. Every old line appears exactly once in an
/// `old_line` slot and every new line exactly once in a `new_line` slot, so
/// both full texts can be rebuilt from the diff alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    pub lines: Vec<LineChange>,
}

impl LineDiff {
    /// Returns `true` if the diff has no rows.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if any row is not [`LineOp::Equal`].
    pub fn has_changes(&self) -> bool {
        self.lines.iter().any(|l| l.op != LineOp::Equal)
    }

    /// Number of lines present only on the new side, replacements included.
    pub fn additions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l.op, LineOp::Insert | LineOp::Replace))
            .count()
    }

    /// Number of lines present only on the old side, replacements included.
    pub fn deletions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l.op, LineOp::Delete | LineOp::Replace))
            .count()
    }

    /// Rebuild the full old text.
    pub fn old_text(&self) -> String {
        join_side(self.lines.iter().filter_map(|l| l.old_line.as_deref()))
    }

    /// Rebuild the full new text.
    pub fn new_text(&self) -> String {
        join_side(self.lines.iter().filter_map(|l| l.new_line.as_deref()))
    }
}

fn join_side<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}
