//! Host-facing errors.
//!
//! Spreadsheet failures (`#VALUE!`, `#N/A`, ...) are values, see [`crate::ErrorKind`]. The types
//! here cover misuse of the library itself: bad configuration or conflicting registrations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("function `{0}` is already registered")]
    Duplicate(String),
    #[error("function `{name}` declares min_args {min_args} greater than max_args {max_args}")]
    InvalidArity {
        name: String,
        min_args: usize,
        max_args: usize,
    },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid calculation settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown value locale `{0}`")]
    UnknownLocale(String),
    #[error("max_materialized_cells must be greater than zero")]
    ZeroCellLimit,
}
