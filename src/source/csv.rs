//! Row-capped, column-whitelisted CSV ingestion.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::config::AnalysisProfile;
use crate::constants::columns::{
    COL_HELPFULNESS_DENOMINATOR, COL_HELPFULNESS_NUMERATOR, COL_SCORE, COL_SUMMARY, COL_TEXT,
    COL_TIME,
};
use crate::data::{ColumnSet, ReviewRecord, WorkingSet};
use crate::errors::AnalysisError;
use crate::source::ReviewSource;
use crate::types::ColumnName;

/// Reads a headered CSV file restricted to a column whitelist.
///
/// Unknown columns are ignored; recognized-but-absent columns clear the
/// matching `ColumnSet` flag so downstream stages skip instead of failing.
/// Numeric columns are coerced at read time with declared types.
pub struct CsvSource {
    path: PathBuf,
    id: String,
    whitelist: Vec<ColumnName>,
}

/// Header positions of the whitelisted columns actually present.
#[derive(Default)]
struct ColumnIndex {
    score: Option<usize>,
    text: Option<usize>,
    summary: Option<usize>,
    helpfulness_numerator: Option<usize>,
    helpfulness_denominator: Option<usize>,
    time: Option<usize>,
}

impl CsvSource {
    /// Create a source over `path` reading only the whitelisted columns.
    pub fn new(path: impl Into<PathBuf>, whitelist: Vec<ColumnName>) -> Self {
        let path = path.into();
        let id = path.display().to_string();
        Self {
            path,
            id,
            whitelist,
        }
    }

    /// Create a source using the profile's column whitelist.
    pub fn for_profile(path: impl Into<PathBuf>, profile: &AnalysisProfile) -> Self {
        Self::new(path, profile.columns.clone())
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ingestion_error(&self, reason: impl Into<String>) -> AnalysisError {
        AnalysisError::Ingestion {
            path: self.id.clone(),
            reason: reason.into(),
        }
    }

    fn index_columns(&self, headers: &csv::StringRecord) -> ColumnIndex {
        let position = |name: &str| -> Option<usize> {
            if !self.whitelist.iter().any(|allowed| allowed == name) {
                return None;
            }
            headers.iter().position(|header| header.trim() == name)
        };
        ColumnIndex {
            score: position(COL_SCORE),
            text: position(COL_TEXT),
            summary: position(COL_SUMMARY),
            helpfulness_numerator: position(COL_HELPFULNESS_NUMERATOR),
            helpfulness_denominator: position(COL_HELPFULNESS_DENOMINATOR),
            time: position(COL_TIME),
        }
    }

    fn parse_numeric<T: FromStr>(
        &self,
        row: usize,
        name: &str,
        raw: &str,
    ) -> Result<Option<T>, AnalysisError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<T>()
            .map(Some)
            .map_err(|_| self.ingestion_error(format!("row {row}: invalid {name} value '{raw}'")))
    }
}

impl ReviewSource for CsvSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self, limit: usize) -> Result<WorkingSet, AnalysisError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|err| self.ingestion_error(err.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|err| self.ingestion_error(err.to_string()))?
            .clone();
        let index = self.index_columns(&headers);
        let columns = ColumnSet {
            score: index.score.is_some(),
            text: index.text.is_some(),
            summary: index.summary.is_some(),
            helpfulness: index.helpfulness_numerator.is_some()
                && index.helpfulness_denominator.is_some(),
            time: index.time.is_some(),
        };

        let mut records = Vec::new();
        for (row, result) in reader.records().take(limit).enumerate() {
            let raw = result.map_err(|err| self.ingestion_error(err.to_string()))?;
            let cell = |idx: Option<usize>| idx.and_then(|idx| raw.get(idx));
            let text_cell = |idx: Option<usize>| {
                cell(idx)
                    .filter(|value| !value.is_empty())
                    .map(|value| value.to_string())
            };
            let mut record = ReviewRecord {
                text: text_cell(index.text),
                summary: text_cell(index.summary),
                time: text_cell(index.time),
                ..ReviewRecord::default()
            };
            if let Some(value) = cell(index.score) {
                record.score = self.parse_numeric::<u8>(row, COL_SCORE, value)?;
            }
            if let Some(value) = cell(index.helpfulness_numerator) {
                record.helpfulness_numerator =
                    self.parse_numeric::<u32>(row, COL_HELPFULNESS_NUMERATOR, value)?;
            }
            if let Some(value) = cell(index.helpfulness_denominator) {
                record.helpfulness_denominator =
                    self.parse_numeric::<u32>(row, COL_HELPFULNESS_DENOMINATOR, value)?;
            }
            records.push(record);
        }
        debug!(
            source = %self.id,
            rows = records.len(),
            score = columns.score,
            text = columns.text,
            helpfulness = columns.helpfulness,
            time = columns.time,
            "csv load complete"
        );
        Ok(WorkingSet::new(columns, records))
    }
}
