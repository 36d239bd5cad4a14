use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid {field} {value:?}: expected one or more ASCII digits")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid year {0:?}: expected exactly 4 digits")]
    InvalidYear(String),

    #[error("invalid standard id {0:?}: expected \"ISO <series>-<part>:<year>\"")]
    InvalidStandardId(String),
}
