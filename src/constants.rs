/// Constants used by the sentiment lexicons and text coercion policy.
pub mod lexicon {
    /// Version tag for the fixed word sets below. Bump when either list changes.
    pub const LEXICON_VERSION: &str = "v1";

    /// Positive lexicon. Matching is case-insensitive substring containment,
    /// no tokenization: `recommend` matches inside `recommended`.
    pub const POSITIVE_WORDS: &[&str] = &[
        "good",
        "great",
        "excellent",
        "awesome",
        "amazing",
        "love",
        "perfect",
        "best",
        "wonderful",
        "fantastic",
        "nice",
        "happy",
        "recommend",
        "satisfied",
        "pleased",
        "outstanding",
        "superb",
    ];

    /// Negative lexicon. Same matching semantics as `POSITIVE_WORDS`.
    pub const NEGATIVE_WORDS: &[&str] = &[
        "bad",
        "terrible",
        "awful",
        "horrible",
        "hate",
        "disappoint",
        "poor",
        "worst",
        "waste",
        "broken",
        "problem",
        "issue",
        "defective",
        "return",
        "refund",
        "complaint",
        "damaged",
        "useless",
    ];

    /// Placeholder a missing review body coerces to. Both length computation
    /// and sentiment scoring see this same string, so the two stages cannot
    /// disagree about an absent text. It contains no lexicon word.
    pub const MISSING_TEXT_PLACEHOLDER: &str = "nan";
}

/// Constants naming the recognized CSV columns and per-profile whitelists.
pub mod columns {
    /// Star rating column, integer domain 1-5.
    pub const COL_SCORE: &str = "Score";
    /// Review body column.
    pub const COL_TEXT: &str = "Text";
    /// Short review headline column.
    pub const COL_SUMMARY: &str = "Summary";
    /// Count of "found helpful" votes.
    pub const COL_HELPFULNESS_NUMERATOR: &str = "HelpfulnessNumerator";
    /// Count of total votes cast.
    pub const COL_HELPFULNESS_DENOMINATOR: &str = "HelpfulnessDenominator";
    /// Unix-seconds timestamp column (exploratory schema only).
    pub const COL_TIME: &str = "Time";

    /// Columns the dashboard profile reads; anything else is ignored.
    pub const DASHBOARD_WHITELIST: &[&str] = &[
        COL_SCORE,
        COL_TEXT,
        COL_HELPFULNESS_NUMERATOR,
        COL_HELPFULNESS_DENOMINATOR,
        COL_SUMMARY,
    ];

    /// Columns the exploratory profile reads; adds the timestamp column.
    pub const EXPLORATORY_WHITELIST: &[&str] = &[
        COL_SCORE,
        COL_TEXT,
        COL_HELPFULNESS_NUMERATOR,
        COL_HELPFULNESS_DENOMINATOR,
        COL_SUMMARY,
        COL_TIME,
    ];
}

/// Default row and sample caps shared by the analysis profiles.
pub mod caps {
    /// Maximum rows read from a source, applied at read time.
    pub const DEFAULT_ROW_CAP: usize = 10_000;
    /// Maximum records classified per sentiment summary.
    pub const DEFAULT_SENTIMENT_SAMPLE_CAP: usize = 500;
    /// Maximum records fed into the length/helpfulness correlation.
    pub const DEFAULT_CORRELATION_SAMPLE_CAP: usize = 1_000;
}

/// Correlation band thresholds and their fixed interpretation wording.
pub mod correlation {
    /// Coefficients above this read as "longer reviews are more helpful".
    pub const POSITIVE_BAND_THRESHOLD: f64 = 0.3;
    /// Coefficients below this read as "shorter reviews are more helpful".
    pub const NEGATIVE_BAND_THRESHOLD: f64 = -0.3;

    /// Interpretation attached to the positive band.
    pub const EFFECT_LONGER: &str = "Longer reviews tend to be more helpful.";
    /// Interpretation attached to the negative band.
    pub const EFFECT_SHORTER: &str = "Shorter reviews tend to be more helpful.";
    /// Interpretation attached to the middle band.
    pub const EFFECT_NONE: &str = "Review length doesn't strongly affect helpfulness.";
}

/// Constants used by report rendering.
pub mod report {
    /// Maximum characters quoted from a review body in mismatch examples.
    pub const EXCERPT_MAX_CHARS: usize = 500;
}
