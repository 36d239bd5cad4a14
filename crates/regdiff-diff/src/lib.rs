//! Diff engine for regdiff.
//!
//! Compares two segmented editions of a standard and produces an ordered
//! clause-level change list. Modified clauses carry a line-level diff that a
//! presentation layer can render as an "Old Version" / "New Version" view.
//!
//! # Key Types
//!
//! - [`ClauseDiff`] -- Clause-level diff (added/modified/deleted clauses)
//! - [`diff_lines`] / [`DiffAlgorithm`] -- Line-level diff of one clause

pub mod clause_diff;
pub mod line_diff;

pub use clause_diff::{diff_clauses, diff_clauses_with, ClauseDiff};
pub use line_diff::{diff_lines, DiffAlgorithm};
