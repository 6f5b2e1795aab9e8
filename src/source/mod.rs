//! Review sources.
//!
//! Ownership model:
//! - A source owns how bytes become records; the pipeline never sees a file.
//! - `load` applies the row cap at read time, never by post-filtering, and
//!   hands the pipeline an exclusively-owned `WorkingSet`.

use crate::data::{ColumnSet, ReviewRecord, WorkingSet};
use crate::errors::AnalysisError;
use crate::types::SourceId;

/// CSV-backed source.
pub mod csv;

pub use self::csv::CsvSource;

/// Pipeline-facing ingestion interface.
///
/// Implementations deliver a schema-checked, row-capped working set or a
/// single ingestion failure; there is no incremental refresh.
pub trait ReviewSource {
    /// Stable source identifier used in reports and logs.
    fn id(&self) -> &str;
    /// Read at most `limit` records.
    fn load(&self, limit: usize) -> Result<WorkingSet, AnalysisError>;
}

/// In-memory source for tests and embedding callers.
pub struct InMemorySource {
    id: SourceId,
    columns: ColumnSet,
    records: Vec<ReviewRecord>,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt records.
    pub fn new(id: impl Into<SourceId>, columns: ColumnSet, records: Vec<ReviewRecord>) -> Self {
        Self {
            id: id.into(),
            columns,
            records,
        }
    }
}

impl ReviewSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self, limit: usize) -> Result<WorkingSet, AnalysisError> {
        let records = self.records.iter().take(limit).cloned().collect();
        Ok(WorkingSet::new(self.columns, records))
    }
}
