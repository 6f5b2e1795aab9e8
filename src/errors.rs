use std::io;

use thiserror::Error;

/// Error type for ingestion, configuration, and derivation failures.
///
/// Degenerate statistics (empty working set, zero-variance correlation) are
/// not errors; they are representable results the caller checks.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("review source '{path}' is unreadable: {reason}")]
    Ingestion { path: String, reason: String },
    #[error("row {row}: malformed timestamp '{value}'")]
    MalformedTimestamp { row: usize, value: String },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
