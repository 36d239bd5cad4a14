use std::io::{self, Write};

use anyhow::Context;
use colored::Colorize;

use regdiff_engine::{ComparisonEngine, ComparisonOutcome, EngineError};

use crate::cli::*;
use crate::config::CliConfig;
use crate::extract::{PlainTextExtractor, TextExtractor};
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(cli, &mut stdout.lock(), &mut stderr.lock())
}

/// Everything needed to run one command.
struct Session<'a> {
    engine: ComparisonEngine,
    extractor: &'a dyn TextExtractor,
    config: CliConfig,
    format: OutputFormat,
}

fn execute(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<()> {
    let Cli {
        command,
        format,
        config,
        ..
    } = cli;

    let config = CliConfig::load(config.as_deref())?;
    let engine = ComparisonEngine::new(config.engine.clone())?;
    let extractor = PlainTextExtractor::new(config.max_document_bytes);
    let ctx = Session {
        engine,
        extractor: &extractor,
        config,
        format,
    };

    match command {
        Command::Compare(args) => cmd_compare(&ctx, args, out, err),
        Command::Identify(args) => cmd_identify(&ctx, args, out),
        Command::Segment(args) => cmd_segment(&ctx, args, out),
    }
}

fn cmd_compare(
    ctx: &Session<'_>,
    args: CompareArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<()> {
    let old_text = ctx.extractor.extract_text(&args.old)?;
    let new_text = ctx.extractor.extract_text(&args.new)?;

    match ctx.engine.compare(&old_text, &new_text) {
        Ok(outcome) => {
            match (ctx.format, &outcome) {
                (OutputFormat::Json, _) => writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?,
                (OutputFormat::Text, ComparisonOutcome::VersionDiff(report)) => write!(
                    out,
                    "{}",
                    render::render_version_diff(report, args.side_by_side, ctx.config.column_width)
                )?,
                (OutputFormat::Text, ComparisonOutcome::CrossReference(guidance)) => {
                    write!(out, "{}", render::render_guidance(guidance))?
                }
            }
            Ok(())
        }
        Err(EngineError::Incompatible(details)) => {
            match ctx.format {
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&details)?)?,
                OutputFormat::Text => write!(err, "{}", render::render_incompatible(&details))?,
            }
            Err(EngineError::Incompatible(details).into())
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_identify(ctx: &Session<'_>, args: IdentifyArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let text = ctx.extractor.extract_text(&args.file)?;
    let identity = ctx.engine.identify(&text);

    match ctx.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "identified": identity.is_some(),
                "standard": identity,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Text => {
            write!(out, "{}", render::render_identity(identity.as_ref()))?;
        }
    }
    Ok(())
}

fn cmd_segment(ctx: &Session<'_>, args: SegmentArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let text = ctx.extractor.extract_text(&args.file)?;
    let clauses = ctx.engine.segment(&text);

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&clauses).context("failed to encode clauses")?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Text => {
            write!(out, "{}", render::render_clauses(&clauses))?;
            writeln!(out, "{} clauses", clauses.len().to_string().bold())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};

    const OLD: &str = "ISO 10993-18:2005\n4.1 Scope\nDo X.\n4.2 Records\nDo Y.\n";
    const NEW: &str = "ISO 10993-18:2020\n4.1 Scope\nDo X.\n4.3 Reporting\nDo Z.\n";
    const PART_17: &str = "ISO 10993-17:2023\n4.1 Scope\nAssess risk.\n";

    fn write_doc(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    fn run(args: &[&str]) -> (anyhow::Result<()>, String, String) {
        colored::control::set_override(false);
        let cli = Cli::try_parse_from(std::iter::once("regdiff").chain(args.iter().copied())).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = execute(cli, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn compare_version_diff_json() {
        let dir = tempfile::tempdir().unwrap();
        let old = write_doc(dir.path(), "old.txt", OLD);
        let new = write_doc(dir.path(), "new.txt", NEW);

        let (result, out, _) = run(&[
            "compare",
            old.to_str().unwrap(),
            new.to_str().unwrap(),
            "--format",
            "json",
        ]);
        result.unwrap();

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["analysisType"], "VERSION_DIFF");
        assert_eq!(json["totalChanges"], 2);
        assert_eq!(json["deltas"][0]["clauseId"], "4.2");
        assert_eq!(json["deltas"][0]["changeType"], "DELETED");
        assert_eq!(json["deltas"][1]["changeText"], "4.3 Reporting\nDo Z.");
    }

    #[test]
    fn compare_cross_reference_text() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_doc(dir.path(), "p17.txt", PART_17);
        let b = write_doc(dir.path(), "p18.txt", NEW);

        let (result, out, err) = run(&["compare", a.to_str().unwrap(), b.to_str().unwrap()]);
        result.unwrap();
        assert!(out.starts_with("Cross-reference: ISO 10993-17:2023 and ISO 10993-18:2020"));
        assert!(out.contains("Next steps:"));
        assert!(err.is_empty());
    }

    #[test]
    fn compare_duplicate_upload_fails_with_prose() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_doc(dir.path(), "a.txt", NEW);
        let b = write_doc(dir.path(), "b.txt", NEW);

        let (result, out, err) = run(&["compare", a.to_str().unwrap(), b.to_str().unwrap()]);
        let e = result.unwrap_err();
        assert!(e.to_string().starts_with("incompatible comparison"));
        assert!(out.is_empty());
        assert!(err.starts_with("Both documents are ISO 10993-18:2020."));
        assert!(err.contains("Comparisons that work:"));
    }

    #[test]
    fn compare_incompatible_json_goes_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_doc(dir.path(), "a.txt", "no identifier");
        let b = write_doc(dir.path(), "b.txt", NEW);

        let (result, out, _) = run(&[
            "compare",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--format",
            "json",
        ]);
        assert!(result.is_err());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["reason"], "UNIDENTIFIED");
    }

    #[test]
    fn compare_missing_file_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let b = write_doc(dir.path(), "b.txt", NEW);
        let missing = dir.path().join("missing.txt");

        let (result, _, _) = run(&["compare", missing.to_str().unwrap(), b.to_str().unwrap()]);
        assert!(result.unwrap_err().to_string().starts_with("failed to read"));
    }

    #[test]
    fn identify_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write_doc(dir.path(), "doc.txt", NEW);

        let (result, out, _) = run(&["identify", doc.to_str().unwrap()]);
        result.unwrap();
        assert!(out.starts_with("ISO 10993-18:2020"));

        let (result, out, _) = run(&["identify", doc.to_str().unwrap(), "--format", "json"]);
        result.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["identified"], true);
        assert_eq!(json["standard"]["fullId"], "ISO 10993-18:2020");
    }

    #[test]
    fn segment_lists_clauses() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write_doc(dir.path(), "doc.txt", OLD);

        let (result, out, _) = run(&["segment", doc.to_str().unwrap()]);
        result.unwrap();
        assert!(out.contains("4.1  4.1 Scope"));
        assert!(out.ends_with("2 clauses\n"));
    }

    #[test]
    fn config_limits_document_size() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write_doc(dir.path(), "doc.txt", OLD);
        let config = write_doc(dir.path(), "regdiff.toml", "max_document_bytes = 8\n");

        let (result, _, _) = run(&[
            "identify",
            doc.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ]);
        assert!(result.unwrap_err().to_string().contains("byte limit"));
    }
}
