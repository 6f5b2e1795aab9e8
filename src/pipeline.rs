//! Stage dispatch and the analysis driver.
//!
//! The pipeline is a fixed linear sequence: derive features, then run each
//! summary stage whose required columns are present. A missing column skips
//! the dependent stage and leaves its slot `None` in the report; it never
//! fails the run.

use indexmap::IndexMap;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::aggregate;
use crate::config::AnalysisProfile;
use crate::constants::columns::{
    COL_HELPFULNESS_DENOMINATOR, COL_HELPFULNESS_NUMERATOR, COL_SCORE, COL_SUMMARY, COL_TEXT,
    COL_TIME,
};
use crate::data::{AnalysisReport, Field, Overview, ReviewRecord, WorkingSet};
use crate::errors::AnalysisError;
use crate::features;
use crate::sentiment;
use crate::source::ReviewSource;
use crate::types::ColumnName;

/// One summary stage, with its declared column requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Ratings,
    Helpfulness,
    Correlation,
    Sentiment,
    Mismatches,
}

impl Stage {
    /// Stages in execution order. Mismatches must follow Sentiment because it
    /// reads the labels that stage wrote back.
    pub const ALL: [Stage; 5] = [
        Stage::Ratings,
        Stage::Helpfulness,
        Stage::Correlation,
        Stage::Sentiment,
        Stage::Mismatches,
    ];

    /// Columns this stage needs before it can run.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            Stage::Ratings => &[Field::Score],
            Stage::Helpfulness => &[Field::Helpfulness],
            Stage::Correlation => &[Field::Text, Field::Helpfulness],
            Stage::Sentiment => &[Field::Text],
            Stage::Mismatches => &[Field::Score, Field::Text],
        }
    }

    /// Stage name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Ratings => "ratings",
            Stage::Helpfulness => "helpfulness",
            Stage::Correlation => "correlation",
            Stage::Sentiment => "sentiment",
            Stage::Mismatches => "mismatches",
        }
    }
}

/// Drives one analysis run: owns the profile and the RNG the sampled stages
/// draw from. Single-threaded and synchronous; each run exclusively owns its
/// working set.
pub struct Analyzer {
    profile: AnalysisProfile,
    rng: StdRng,
}

impl Analyzer {
    /// Build an analyzer for the given profile.
    pub fn new(profile: AnalysisProfile) -> Self {
        let rng = profile.rng();
        Self { profile, rng }
    }

    /// The profile this analyzer runs under.
    pub fn profile(&self) -> &AnalysisProfile {
        &self.profile
    }

    /// Ingest from `source` (row cap applied at read time) and analyze.
    pub fn run(
        &mut self,
        source: &dyn ReviewSource,
    ) -> Result<(WorkingSet, AnalysisReport), AnalysisError> {
        let mut working_set = source.load(self.profile.row_cap)?;
        debug!(source = source.id(), rows = working_set.len(), "ingested");
        let report = self.analyze(&mut working_set)?;
        Ok((working_set, report))
    }

    /// Derive features and run every supported stage over `working_set`.
    ///
    /// Derived fields (ratio, length, sampled sentiment labels, dates) are
    /// written back onto the records so callers can display any row.
    pub fn analyze(
        &mut self,
        working_set: &mut WorkingSet,
    ) -> Result<AnalysisReport, AnalysisError> {
        features::derive(working_set, &self.profile)?;
        let mut report = AnalysisReport {
            overview: overview(working_set),
            ratings: None,
            helpfulness: None,
            correlation: None,
            sentiment: None,
            mismatches: None,
        };
        for stage in Stage::ALL {
            if !working_set.columns.supports(stage.required_fields()) {
                warn!(stage = stage.name(), "skipping stage: required column absent");
                continue;
            }
            match stage {
                Stage::Ratings => report.ratings = aggregate::rating_distribution(working_set),
                Stage::Helpfulness => {
                    report.helpfulness = aggregate::helpfulness_summary(working_set)
                }
                Stage::Correlation => {
                    report.correlation = Some(aggregate::length_correlation(
                        working_set,
                        self.profile.correlation_sample_cap,
                        &mut self.rng,
                    ))
                }
                Stage::Sentiment => {
                    report.sentiment = Some(sentiment::summarize(
                        working_set,
                        self.profile.sentiment_sample_cap,
                        &mut self.rng,
                    ))
                }
                Stage::Mismatches => {
                    report.mismatches = Some(sentiment::rating_sentiment_mismatches(working_set))
                }
            }
        }
        Ok(report)
    }
}

/// Row count, present columns, and per-column missing-cell counts.
fn overview(working_set: &WorkingSet) -> Overview {
    let columns = working_set.columns;
    let records = &working_set.records;
    let absent = |is_missing: fn(&ReviewRecord) -> bool| -> usize {
        records.iter().filter(|record| is_missing(record)).count()
    };
    let mut missing: IndexMap<ColumnName, usize> = IndexMap::new();
    if columns.score {
        missing.insert(COL_SCORE.to_string(), absent(|r| r.score.is_none()));
    }
    if columns.text {
        missing.insert(COL_TEXT.to_string(), absent(|r| r.text.is_none()));
    }
    if columns.summary {
        missing.insert(COL_SUMMARY.to_string(), absent(|r| r.summary.is_none()));
    }
    if columns.helpfulness {
        missing.insert(
            COL_HELPFULNESS_NUMERATOR.to_string(),
            absent(|r| r.helpfulness_numerator.is_none()),
        );
        missing.insert(
            COL_HELPFULNESS_DENOMINATOR.to_string(),
            absent(|r| r.helpfulness_denominator.is_none()),
        );
    }
    if columns.time {
        missing.insert(COL_TIME.to_string(), absent(|r| r.time.is_none()));
    }
    Overview {
        rows: working_set.len(),
        columns: missing.keys().cloned().collect(),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ColumnSet, ReviewRecord};

    #[test]
    fn stage_requirements_cover_every_stage() {
        for stage in Stage::ALL {
            assert!(!stage.required_fields().is_empty(), "{}", stage.name());
        }
    }

    #[test]
    fn overview_counts_missing_cells_per_column() {
        let columns = ColumnSet {
            score: true,
            text: true,
            ..ColumnSet::default()
        };
        let records = vec![
            ReviewRecord {
                score: Some(5),
                text: Some("fine".into()),
                ..ReviewRecord::default()
            },
            ReviewRecord {
                score: Some(3),
                ..ReviewRecord::default()
            },
        ];
        let working_set = WorkingSet::new(columns, records);
        let overview = overview(&working_set);

        assert_eq!(overview.rows, 2);
        assert_eq!(overview.columns, vec!["Score".to_string(), "Text".to_string()]);
        assert_eq!(overview.missing["Score"], 0);
        assert_eq!(overview.missing["Text"], 1);
    }
}
