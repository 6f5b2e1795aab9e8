use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::correlation::{EFFECT_LONGER, EFFECT_NONE, EFFECT_SHORTER};

pub use crate::types::{ColumnName, Excerpt, RawTimestamp, SourceId};

/// Per-record sentiment classification produced by the lexicon heuristic.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// Numeric encoding used by the original heuristic: -1, 0, or 1.
    pub fn value(self) -> i8 {
        match self {
            SentimentLabel::Negative => -1,
            SentimentLabel::Neutral => 0,
            SentimentLabel::Positive => 1,
        }
    }

    /// Display name for tables and logs.
    pub fn name(self) -> &'static str {
        match self {
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Positive => "positive",
        }
    }
}

/// One row of the working set: raw columns as read, derived fields computed
/// by the pipeline. Raw fields are never mutated after ingestion.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Star rating, expected domain 1-5.
    pub score: Option<u8>,
    /// Free-form review body; absent cells stay `None` and coerce to a
    /// placeholder at use sites (see `features::text_of`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Short review headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Count of "found helpful" votes.
    pub helpfulness_numerator: Option<u32>,
    /// Count of total votes cast; may be 0.
    pub helpfulness_denominator: Option<u32>,
    /// Raw Unix-seconds timestamp cell, parsed only when date derivation runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<RawTimestamp>,
    /// Derived: numerator/denominator in [0,1]; exactly 0.0 when denominator is 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helpfulness_ratio: Option<f64>,
    /// Derived: character count of the coerced review body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_length: Option<usize>,
    /// Derived: lexicon sentiment label (populated for sampled records).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentLabel>,
    /// Derived: `time` reinterpreted as a UTC timestamp at second granularity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Logical column a stage can require from a working set.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Field {
    Score,
    Text,
    Summary,
    /// Both helpfulness columns together; the ratio needs numerator and denominator.
    Helpfulness,
    Time,
}

/// Column-presence flags for one working set.
///
/// Presence is a property of the ingested schema, not of individual rows;
/// stages consult these flags before dispatching and skip when a required
/// column is absent.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSet {
    pub score: bool,
    pub text: bool,
    pub summary: bool,
    pub helpfulness: bool,
    pub time: bool,
}

impl ColumnSet {
    /// Returns `true` when the logical column is present.
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Score => self.score,
            Field::Text => self.text,
            Field::Summary => self.summary,
            Field::Helpfulness => self.helpfulness,
            Field::Time => self.time,
        }
    }

    /// Returns `true` when every listed field is present.
    pub fn supports(&self, fields: &[Field]) -> bool {
        fields.iter().all(|field| self.has(*field))
    }
}

/// Ordered, bounded sequence of records owned by one analysis run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkingSet {
    /// Schema flags derived at ingestion.
    pub columns: ColumnSet,
    /// Records in source order, already capped at read time.
    pub records: Vec<ReviewRecord>,
}

impl WorkingSet {
    /// Build a working set from pre-capped records.
    pub fn new(columns: ColumnSet, records: Vec<ReviewRecord>) -> Self {
        Self { columns, records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One row of the rating distribution table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RatingRow {
    pub rating: u8,
    pub count: usize,
    /// count / total * 100, rounded to 1 decimal.
    pub percentage: f64,
}

/// Rating distribution over all scored records, ascending by rating.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RatingDistribution {
    pub rows: Vec<RatingRow>,
    /// Arithmetic mean of the score; callers guard the empty case upstream.
    pub mean: f64,
    /// Rating with the highest count; ties resolve to the lowest rating.
    pub most_common: u8,
    /// Number of scored records.
    pub total: usize,
}

/// Mean helpfulness ratio within one rating group.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HelpfulnessRow {
    pub rating: u8,
    pub mean_ratio: f64,
}

/// Helpfulness aggregates over records with a derived ratio.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HelpfulnessSummary {
    /// Mean ratio across all records.
    pub mean_ratio: f64,
    /// Number of records with ratio > 0.
    pub helpful_count: usize,
    /// Per-rating means, ascending; groups with zero records are absent.
    /// Empty when the score column is missing.
    pub by_rating: Vec<HelpfulnessRow>,
}

/// Qualitative band for the length/helpfulness correlation.
///
/// Thresholds are exact fixed policy (0.3 / -0.3), reproduced verbatim.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LengthEffect {
    LongerMoreHelpful,
    ShorterMoreHelpful,
    NoStrongEffect,
}

impl LengthEffect {
    /// Fixed interpretation sentence for this band.
    pub fn message(self) -> &'static str {
        match self {
            LengthEffect::LongerMoreHelpful => EFFECT_LONGER,
            LengthEffect::ShorterMoreHelpful => EFFECT_SHORTER,
            LengthEffect::NoStrongEffect => EFFECT_NONE,
        }
    }
}

/// Why a correlation could not be computed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum UndefinedCorrelation {
    /// Fewer than 2 sampled points.
    TooFewPoints,
    /// One of the variables has zero variance in the sample.
    ZeroVariance,
}

/// Result of the sampled length/helpfulness correlation.
///
/// `Undefined` is a first-class state, not an effect band; consumers must
/// check it before formatting.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum CorrelationOutcome {
    Defined {
        /// Pearson coefficient over the sample.
        coefficient: f64,
        /// Fixed-threshold qualitative band.
        effect: LengthEffect,
        /// Number of sampled points.
        sampled: usize,
    },
    Undefined {
        reason: UndefinedCorrelation,
        sampled: usize,
    },
}

impl CorrelationOutcome {
    /// Returns `true` for the `Defined` variant.
    pub fn is_defined(&self) -> bool {
        matches!(self, CorrelationOutcome::Defined { .. })
    }
}

/// Per-label tallies over the sentiment sample.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentSummary {
    /// Number of records classified (never exceeds min(cap, len)).
    pub sampled: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentSummary {
    /// Tally for one label.
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }
}

/// First example backing a mismatch count.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MismatchExample {
    /// Record index within the working set.
    pub row: usize,
    /// Truncated review body.
    pub excerpt: Excerpt,
}

/// Records whose star rating and lexicon sentiment disagree.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MismatchReport {
    /// 5-star records classified negative.
    pub negative_high_rated: usize,
    /// 1-star records classified positive.
    pub positive_low_rated: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_high_example: Option<MismatchExample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_low_example: Option<MismatchExample>,
}

/// Basic shape of the ingested working set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Overview {
    /// Number of records after the row cap.
    pub rows: usize,
    /// Physical columns present, in canonical order.
    pub columns: Vec<ColumnName>,
    /// Per-column count of absent cells, keyed in column order.
    pub missing: IndexMap<ColumnName, usize>,
}

/// Full output of one analysis run.
///
/// Stages whose required columns were absent are `None`; the run itself
/// never fails on a missing column.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overview: Overview,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<RatingDistribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helpfulness: Option<HelpfulnessSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mismatches: Option<MismatchReport>,
}
