//! Standard identification and version-diff engine.
//!
//! Takes the extracted text of two documents, works out which ISO-style
//! standard each one is, and decides whether they can be compared:
//!
//! - two editions of the same part: a clause-level diff ([`VersionDiffReport`])
//! - two parts of the same series: explanatory guidance ([`CrossReferenceGuidance`])
//! - anything else: [`EngineError::Incompatible`] with remediation text
//!
//! The engine is synchronous and performs no I/O. Text extraction, storage
//! and presentation belong to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use regdiff_engine::{ComparisonEngine, EngineConfig};
//!
//! let engine = ComparisonEngine::new(EngineConfig::default()).unwrap();
//! let old = "ISO 10993-18:2005\n4.1 Scope\nDo X.\n4.2 Records\nDo Y.\n";
//! let new = "ISO 10993-18:2020\n4.1 Scope\nDo X.\n4.3 Reporting\nDo Z.\n";
//!
//! let outcome = engine.compare(old, new).unwrap();
//! let report = outcome.as_version_diff().unwrap();
//! assert_eq!(report.total_changes, 2);
//! ```

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod identifier;
pub mod incompatible;
pub mod report;
pub mod segmenter;

// Re-exports for convenience.
pub use classifier::classify;
pub use config::EngineConfig;
pub use engine::ComparisonEngine;
pub use error::{EngineError, EngineResult};
pub use identifier::StandardIdentifier;
pub use incompatible::IncompatibleComparison;
pub use report::{ComparisonOutcome, CrossReferenceGuidance, DiffSummary, VersionDiffReport};
pub use segmenter::ClauseSegmenter;

pub use regdiff_diff::DiffAlgorithm;
pub use regdiff_types::{
    ChangeType, ClauseMap, ComparisonMode, Delta, IncompatibleReason, LineChange, LineDiff,
    LineOp, StandardIdentity,
};
