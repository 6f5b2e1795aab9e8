//! Feature derivation over raw records.
//!
//! Each derivation reads raw fields only and writes derived fields only, so
//! re-running it over an already-derived working set yields identical output.

use chrono::{TimeZone, Utc};

use crate::config::AnalysisProfile;
use crate::constants::lexicon::MISSING_TEXT_PLACEHOLDER;
use crate::data::{ReviewRecord, WorkingSet};
use crate::errors::AnalysisError;

/// Total accessor for a record's review body.
///
/// Absent text coerces to the fixed `"nan"` placeholder; length computation
/// and sentiment scoring both go through here, so neither can ever observe a
/// missing body differently.
pub fn text_of(record: &ReviewRecord) -> &str {
    record.text.as_deref().unwrap_or(MISSING_TEXT_PLACEHOLDER)
}

/// Helpfulness ratio policy: numerator/denominator when votes exist,
/// exactly 0.0 (not null, not NaN) when the denominator is 0. Total, so
/// downstream aggregation never has to special-case unvoted reviews.
pub fn helpfulness_ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator > 0 {
        f64::from(numerator) / f64::from(denominator)
    } else {
        0.0
    }
}

/// Populate derived fields on every record.
///
/// Ratio and length derivations are gated on column presence; date parsing
/// additionally requires the profile to ask for it. A non-numeric `Time`
/// cell surfaces as [`AnalysisError::MalformedTimestamp`] rather than being
/// silently zeroed.
pub fn derive(working_set: &mut WorkingSet, profile: &AnalysisProfile) -> Result<(), AnalysisError> {
    let columns = working_set.columns;
    let parse_dates = profile.derive_dates && columns.time;
    for (row, record) in working_set.records.iter_mut().enumerate() {
        if columns.helpfulness {
            let numerator = record.helpfulness_numerator.unwrap_or(0);
            let denominator = record.helpfulness_denominator.unwrap_or(0);
            record.helpfulness_ratio = Some(helpfulness_ratio(numerator, denominator));
        }
        if columns.text {
            record.review_length = Some(text_of(record).chars().count());
        }
        if parse_dates {
            record.date = match record.time.as_deref() {
                Some(raw) => Some(parse_timestamp(row, raw)?),
                None => None,
            };
        }
    }
    Ok(())
}

fn parse_timestamp(row: usize, raw: &str) -> Result<chrono::DateTime<Utc>, AnalysisError> {
    let malformed = || AnalysisError::MalformedTimestamp {
        row,
        value: raw.to_string(),
    };
    let seconds: i64 = raw.trim().parse().map_err(|_| malformed())?;
    Utc.timestamp_opt(seconds, 0).single().ok_or_else(malformed)
}
