//! Terminal rendering of engine results.

use std::fmt::Write as _;

use colored::Colorize;

use regdiff_engine::{
    ChangeType, ClauseMap, CrossReferenceGuidance, Delta, IncompatibleComparison, LineChange,
    LineDiff, LineOp, StandardIdentity, VersionDiffReport,
};

pub fn render_version_diff(report: &VersionDiffReport, side_by_side: bool, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {}",
        report.old_standard_id.bold(),
        "→".dimmed(),
        report.new_standard_id.bold()
    );

    if report.deltas.is_empty() {
        let _ = writeln!(out, "\nNo clause changes.");
        return out;
    }

    let _ = writeln!(
        out,
        "{} changes ({} added, {} modified, {} deleted)",
        report.total_changes.to_string().bold(),
        report.summary.added,
        report.summary.modified,
        report.summary.deleted
    );

    for delta in &report.deltas {
        out.push('\n');
        out.push_str(&render_delta(delta, side_by_side, width));
    }
    out
}

fn render_delta(delta: &Delta, side_by_side: bool, width: usize) -> String {
    let mut out = String::new();
    let label = match delta.change_type {
        ChangeType::Added => delta.change_type.label().green(),
        ChangeType::Modified => delta.change_type.label().yellow(),
        ChangeType::Deleted => delta.change_type.label().red(),
    };
    let _ = writeln!(out, "{} {}", delta.clause_id.bold(), label);

    match (&delta.change_type, &delta.diff_representation) {
        (ChangeType::Modified, Some(diff)) if side_by_side => {
            out.push_str(&render_side_by_side(diff, width));
        }
        (ChangeType::Modified, Some(diff)) => {
            for line in &diff.lines {
                out.push_str(&render_inline(line));
            }
        }
        _ => {
            for line in delta.change_text.lines() {
                let _ = writeln!(out, "    {line}");
            }
        }
    }
    out
}

fn render_inline(line: &LineChange) -> String {
    let mut out = String::new();
    if let Some(old) = line.old_line.as_deref().filter(|_| line.op != LineOp::Equal) {
        let _ = writeln!(out, "  {}", format!("- {old}").red());
    }
    match (line.op, line.new_line.as_deref()) {
        (LineOp::Equal, Some(text)) => {
            let _ = writeln!(out, "    {text}");
        }
        (_, Some(new)) => {
            let _ = writeln!(out, "  {}", format!("+ {new}").green());
        }
        (_, None) => {}
    }
    out
}

/// Render a line diff as "Old Version" / "New Version" columns.
pub fn render_side_by_side(diff: &LineDiff, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {} | {}",
        pad("Old Version", width).bold(),
        "New Version".bold()
    );
    let _ = writeln!(out, "  {}-+-{}", "-".repeat(width), "-".repeat(width));

    for line in &diff.lines {
        let old = pad(line.old_line.as_deref().unwrap_or(""), width);
        let new = truncate(line.new_line.as_deref().unwrap_or(""), width);
        let (old, new) = match line.op {
            LineOp::Equal => (old.normal(), new.normal()),
            LineOp::Delete => (old.red(), new.normal()),
            LineOp::Insert => (old.normal(), new.green()),
            LineOp::Replace => (old.red(), new.green()),
        };
        let marker = match line.op {
            LineOp::Equal => ' ',
            LineOp::Delete => '-',
            LineOp::Insert => '+',
            LineOp::Replace => '~',
        };
        let _ = writeln!(out, "{marker} {old} | {new}");
    }
    out
}

pub fn render_guidance(guidance: &CrossReferenceGuidance) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} and {}",
        "Cross-reference:".cyan().bold(),
        guidance.first_standard_id.bold(),
        guidance.second_standard_id.bold()
    );
    let _ = writeln!(out, "\n{}", guidance.relationship);
    let _ = writeln!(out, "\n{}", guidance.message);
    let _ = writeln!(out, "\nNext steps:");
    for suggestion in &guidance.suggestions {
        let _ = writeln!(out, "  • {suggestion}");
    }
    out
}

pub fn render_incompatible(details: &IncompatibleComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", details.message);
    let _ = writeln!(out, "{}", "Comparisons that work:".green());
    for example in &details.valid_examples {
        let _ = writeln!(out, "  ✓ {example}");
    }
    let _ = writeln!(out, "{}", "Comparisons that are rejected:".red());
    for example in &details.invalid_examples {
        let _ = writeln!(out, "  ✗ {example}");
    }
    out
}

pub fn render_identity(identity: Option<&StandardIdentity>) -> String {
    match identity {
        Some(id) => format!(
            "{} (series {}, part {}, year {})\n",
            id.full_id().bold(),
            id.series(),
            id.part(),
            id.year()
        ),
        None => format!("{}\n", "No standard identified.".yellow()),
    }
}

pub fn render_clauses(clauses: &ClauseMap) -> String {
    if clauses.is_empty() {
        return format!("{}\n", "No numbered clauses found.".yellow());
    }
    let mut out = String::new();
    for (id, text) in clauses {
        let first = text.lines().next().unwrap_or("");
        let extra = text.lines().count().saturating_sub(1);
        let _ = writeln!(out, "{}  {}  {}", id.bold(), first, format!("(+{extra} lines)").dimmed());
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn pad(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let fill = width.saturating_sub(cut.chars().count());
    format!("{cut}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regdiff_engine::{ComparisonEngine, EngineConfig};

    fn plain() {
        colored::control::set_override(false);
    }

    fn report() -> VersionDiffReport {
        let engine = ComparisonEngine::new(EngineConfig::default()).unwrap();
        let old = "ISO 10993-18:2005\n4.1 Scope\nDo X.\n4.2 Records\nDo Y.\n";
        let new = "ISO 10993-18:2020\n4.1 Scope\nDo X now.\n4.3 Reporting\nDo Z.\n";
        engine
            .compare(old, new)
            .unwrap()
            .as_version_diff()
            .cloned()
            .unwrap()
    }

    #[test]
    fn truncate_and_pad() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("much too long", 5), "much…");
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4).chars().count(), 4);
    }

    #[test]
    fn side_by_side_has_headers_and_markers() {
        plain();
        let diff = LineDiff {
            lines: vec![
                LineChange::equal("4.1 Scope"),
                LineChange::replace("Do X.", "Do X now."),
                LineChange::insert("Note."),
            ],
        };
        let text = render_side_by_side(&diff, 12);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "  Old Version  | New Version");
        assert_eq!(rows[2], "  4.1 Scope    | 4.1 Scope");
        assert_eq!(rows[3], "~ Do X.        | Do X now.");
        assert_eq!(rows[4], "+              | Note.");
    }

    #[test]
    fn version_diff_lists_every_delta() {
        plain();
        let text = render_version_diff(&report(), false, 40);
        assert!(text.starts_with("ISO 10993-18:2005 → ISO 10993-18:2020"));
        assert!(text.contains("3 changes (1 added, 1 modified, 1 deleted)"));
        assert!(text.contains("4.1 MODIFIED"));
        assert!(text.contains("  - Do X."));
        assert!(text.contains("  + Do X now."));
        assert!(text.contains("4.2 DELETED\n    4.2 Records\n    Do Y."));
        assert!(text.contains("4.3 ADDED"));
    }

    #[test]
    fn version_diff_side_by_side() {
        plain();
        let text = render_version_diff(&report(), true, 20);
        assert!(text.contains("Old Version"));
        assert!(text.contains("New Version"));
    }

    #[test]
    fn empty_report() {
        plain();
        let mut r = report();
        r.deltas.clear();
        r.total_changes = 0;
        assert!(render_version_diff(&r, false, 40).contains("No clause changes."));
    }

    #[test]
    fn identity_and_clauses() {
        plain();
        let id: StandardIdentity = "ISO 10993-18:2020".parse().unwrap();
        assert_eq!(
            render_identity(Some(&id)),
            "ISO 10993-18:2020 (series 10993, part 18, year 2020)\n"
        );
        assert_eq!(render_identity(None), "No standard identified.\n");

        let clauses = regdiff_engine::ClauseMap::from([("4.1".to_string(), "4.1 Scope\nDo X.".to_string())]);
        assert_eq!(render_clauses(&clauses), "4.1  4.1 Scope  (+1 lines)\n");
        assert_eq!(render_clauses(&ClauseMap::new()), "No numbered clauses found.\n");
    }
}
