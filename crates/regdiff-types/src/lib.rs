//! Foundation types for regdiff.
//!
//! Shared by the diff and engine crates. Everything here is plain data:
//! constructed per analysis call and discarded once a response is built.
//!
//! # Key Types
//!
//! - [`StandardIdentity`] -- series, part and year of an ISO-style standard
//! - [`ClauseMap`] -- clause id to clause text for one document
//! - [`Delta`] / [`ChangeType`] -- one clause-level change
//! - [`LineDiff`] / [`LineChange`] -- line-level diff of a modified clause
//! - [`ComparisonMode`] / [`IncompatibleReason`] -- how two documents relate

pub mod clause;
pub mod delta;
pub mod error;
pub mod identity;
pub mod mode;

pub use clause::{clause_map, ClauseMap};
pub use delta::{ChangeType, Delta, LineChange, LineDiff, LineOp};
pub use error::TypeError;
pub use identity::StandardIdentity;
pub use mode::{ComparisonMode, IncompatibleReason};
