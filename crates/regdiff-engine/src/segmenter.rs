//! Clause segmentation: split raw document text into numbered clauses.

use regex::Regex;
use tracing::debug;

use regdiff_types::ClauseMap;

use crate::error::EngineResult;

/// A dotted-numeric id, whitespace, then a capitalised heading word.
/// Leading indentation is ignored when matching.
const HEADING: &str = r"^\s*([0-9]+(?:\.[0-9]+)*)\s+[A-Z]";

/// Splits document text into a [`ClauseMap`].
///
/// A heading line opens a new clause and is kept as the clause's first line.
/// Lines that are not headings belong to the open clause; lines before the
/// first heading are dropped. When an id repeats, the later clause replaces
/// the earlier one.
#[derive(Clone, Debug)]
pub struct ClauseSegmenter {
    heading: Regex,
}

impl ClauseSegmenter {
    /// Compile the heading pattern.
    pub fn new() -> EngineResult<Self> {
        Ok(Self {
            heading: Regex::new(HEADING)?,
        })
    }

    /// Returns the clause id if `line` opens a new clause.
    pub fn heading_id<'t>(&self, line: &'t str) -> Option<&'t str> {
        self.heading
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Segment `text` into clauses. Text without headings yields an empty map.
    pub fn segment(&self, text: &str) -> ClauseMap {
        let mut clauses = ClauseMap::new();
        let mut open: Option<(&str, Vec<&str>)> = None;
        let mut replaced = 0usize;

        for line in text.lines() {
            match self.heading_id(line) {
                Some(id) => {
                    if let Some((prev_id, lines)) = open.replace((id, vec![line])) {
                        if clauses.insert(prev_id.to_string(), join_clause(&lines)).is_some() {
                            replaced += 1;
                        }
                    }
                }
                None => {
                    if let Some((_, lines)) = open.as_mut() {
                        lines.push(line);
                    }
                }
            }
        }

        if let Some((id, lines)) = open {
            if clauses.insert(id.to_string(), join_clause(&lines)).is_some() {
                replaced += 1;
            }
        }

        debug!(clauses = clauses.len(), replaced, "segmented document");
        clauses
    }
}

fn join_clause(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn segmenter() -> ClauseSegmenter {
        ClauseSegmenter::new().unwrap()
    }

    #[test]
    fn splits_on_headings() {
        let text = "\
Foreword
This preamble is dropped.
4 General requirements
4.1 Scope
The manufacturer shall do X.
It shall also do Y.
4.2 Records
Keep records.
";
        let clauses = segmenter().segment(text);
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses["4"], "4 General requirements");
        assert_eq!(
            clauses["4.1"],
            "4.1 Scope\nThe manufacturer shall do X.\nIt shall also do Y."
        );
        assert_eq!(clauses["4.2"], "4.2 Records\nKeep records.");
    }

    #[test]
    fn heading_needs_capitalised_word() {
        let s = segmenter();
        assert_eq!(s.heading_id("7.3.5 Design validation"), Some("7.3.5"));
        assert_eq!(s.heading_id("  8.2 Monitoring"), Some("8.2"));
        assert_eq!(s.heading_id("7.3 design validation"), None);
        assert_eq!(s.heading_id("7.3Design"), None);
        assert_eq!(s.heading_id("7. Design"), None);
        assert_eq!(s.heading_id("Table 7.3 Results"), None);
        assert_eq!(s.heading_id("10 mg of Substance"), None);
        // Body lines that happen to fit the shape still open a clause.
        assert_eq!(s.heading_id("10 Substances shall be"), Some("10"));
    }

    #[test]
    fn body_lines_are_kept_verbatim_and_clause_is_trimmed() {
        let text = "5.1 Design\n\n   indented detail\n\n\n5.2 Next\n";
        let clauses = segmenter().segment(text);
        assert_eq!(clauses["5.1"], "5.1 Design\n\n   indented detail");
    }

    #[test]
    fn duplicate_ids_last_occurrence_wins() {
        let text = "3.1 Terms\nfirst body\n3.2 Other\nx\n3.1 Terms\nsecond body\n";
        let clauses = segmenter().segment(text);
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses["3.1"], "3.1 Terms\nsecond body");
    }

    #[test]
    fn crlf_line_endings() {
        let clauses = segmenter().segment("6.1 Risk\r\nAssess risk.\r\n6.2 Control\r\nControl it.\r\n");
        assert_eq!(clauses["6.1"], "6.1 Risk\nAssess risk.");
        assert_eq!(clauses["6.2"], "6.2 Control\nControl it.");
    }

    #[test]
    fn text_without_headings_is_empty() {
        let s = segmenter();
        assert!(s.segment("").is_empty());
        assert!(s.segment("just prose\nwith no numbered clauses\n").is_empty());
    }

    proptest! {
        #[test]
        fn lowercase_text_never_yields_clauses(text in "[a-z0-9 .\\n]{0,200}") {
            prop_assert!(segmenter().segment(&text).is_empty());
        }

        #[test]
        fn every_clause_starts_with_its_id(text in "([0-9]{1,2}(\\.[0-9]){0,2} [A-Z][a-z]{0,8}\\n[a-z ]{0,20}\\n){0,6}") {
            for (id, body) in segmenter().segment(&text) {
                prop_assert!(body.starts_with(&id));
            }
        }
    }
}
