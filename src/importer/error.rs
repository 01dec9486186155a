// ==========================================
// Inventory Console - import error types
// ==========================================
// Tool: thiserror derive macro
//
// Error policy (operator-facing):
// - MissingColumns is fatal to the whole import, raised before any row
//   is inspected; the store is untouched.
// - Per-row failures are never errors at this level: they land in the
//   batch's invalid partition with reasons.
// - StoreWrite is fatal to the write; the transaction rolls back and
//   prior state is intact.
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// Import layer errors
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv is supported)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    // ===== Header errors =====
    #[error("required columns missing after header normalization: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    // ===== Store errors =====
    #[error("store write failed, no rows were committed: {0}")]
    StoreWriteError(#[from] RepositoryError),

    // ===== Generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result alias
pub type ImportResult<T> = Result<T, ImportError>;
