#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Aggregate summaries over a derived working set.
pub mod aggregate;
/// Console front-end runners shared by the binaries.
pub mod apps;
/// Analysis profiles: row/sample caps, date toggle, seeding.
pub mod config;
/// Fixed lexicons, column names, caps, and band thresholds.
pub mod constants;
/// Review records, the working set, and summary output types.
pub mod data;
/// Feature derivation over raw records.
pub mod features;
/// Stage dispatch and the analysis driver.
pub mod pipeline;
/// Console renderers for the summary tables.
pub mod report;
/// Lexicon sentiment scoring and the rating-mismatch probe.
pub mod sentiment;
/// Review sources (CSV and in-memory ingestion).
pub mod source;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::AnalysisProfile;
pub use data::{
    AnalysisReport, ColumnSet, CorrelationOutcome, Field, HelpfulnessSummary, LengthEffect,
    MismatchReport, Overview, RatingDistribution, ReviewRecord, SentimentLabel, SentimentSummary,
    UndefinedCorrelation, WorkingSet,
};
pub use errors::AnalysisError;
pub use pipeline::{Analyzer, Stage};
pub use sentiment::classify;
pub use source::{CsvSource, InMemorySource, ReviewSource};
pub use types::{ColumnName, SourceId};
