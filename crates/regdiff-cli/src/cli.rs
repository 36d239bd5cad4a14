use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "regdiff",
    about = "Clause-level comparison of regulatory standard editions",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two editions of a standard
    Compare(CompareArgs),
    /// Identify the standard a document belongs to
    Identify(IdentifyArgs),
    /// List the numbered clauses found in a document
    Segment(SegmentArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// The earlier edition
    pub old: PathBuf,
    /// The later edition
    pub new: PathBuf,
    /// Show modified clauses as Old Version / New Version columns
    #[arg(long)]
    pub side_by_side: bool,
}

#[derive(Args)]
pub struct IdentifyArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct SegmentArgs {
    pub file: PathBuf,
}
