//! Load-time errors for the question bank.
//!
//! These errors are deliberately non-fatal: `QuestionStore::load` logs them
//! and degrades to an empty store, so query callers never observe them.

use thiserror::Error;

/// Errors that can occur while reading the question bank CSV.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The CSV file could not be opened or read.
    #[error("[Question Store] cannot read question bank: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV payload was malformed.
    #[error("[Question Store] malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A mandatory column is absent from the header row.
    #[error("[Question Store] missing required column: {0}")]
    MissingColumn(&'static str),
}
