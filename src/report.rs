//! Console renderers for the summary tables.
//!
//! Pure string builders so front-ends stay thin and the wording is testable.

use std::fmt::Write;

use crate::data::{
    AnalysisReport, CorrelationOutcome, HelpfulnessSummary, MismatchReport, Overview,
    RatingDistribution, SentimentSummary, UndefinedCorrelation,
};

/// Group a count with thousands separators for table output.
pub fn format_count_with_commas(value: usize) -> String {
    let raw = value.to_string();
    let mut grouped_reversed = String::with_capacity(raw.len() + (raw.len() / 3));
    for (idx, ch) in raw.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped_reversed.push(',');
        }
        grouped_reversed.push(ch);
    }
    grouped_reversed.chars().rev().collect()
}

/// Dataset overview block: rows, columns, missing cells.
pub fn render_overview(overview: &Overview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dataset overview");
    let _ = writeln!(
        out,
        "  rows: {}  columns: {}",
        format_count_with_commas(overview.rows),
        overview.columns.len()
    );
    for (column, missing) in &overview.missing {
        let _ = writeln!(out, "  {column}: {missing} missing");
    }
    out
}

/// Rating distribution table plus mean and mode.
pub fn render_ratings(distribution: &RatingDistribution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Star rating distribution");
    let _ = writeln!(
        out,
        "  average rating: {:.2}  most common: {}  reviews: {}",
        distribution.mean,
        distribution.most_common,
        format_count_with_commas(distribution.total)
    );
    let _ = writeln!(out, "  rating  count  percentage");
    for row in &distribution.rows {
        let _ = writeln!(
            out,
            "  {:>6}  {:>5}  {:>9.1}%",
            row.rating, row.count, row.percentage
        );
    }
    out
}

/// Helpfulness block: overall mean, helpful count, per-rating means.
pub fn render_helpfulness(summary: &HelpfulnessSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Helpfulness");
    let _ = writeln!(
        out,
        "  average helpfulness: {:.3}  helpful reviews: {}",
        summary.mean_ratio,
        format_count_with_commas(summary.helpful_count)
    );
    if !summary.by_rating.is_empty() {
        let _ = writeln!(out, "  rating  mean ratio");
        for row in &summary.by_rating {
            let _ = writeln!(out, "  {:>6}  {:>10.3}", row.rating, row.mean_ratio);
        }
    }
    out
}

/// Correlation line with its fixed interpretation, or the undefined notice.
pub fn render_correlation(outcome: &CorrelationOutcome) -> String {
    match outcome {
        CorrelationOutcome::Defined {
            coefficient,
            effect,
            sampled,
        } => format!(
            "Length vs helpfulness correlation: {coefficient:.3} (sample of {sampled})\n  {}\n",
            effect.message()
        ),
        CorrelationOutcome::Undefined { reason, sampled } => {
            let why = match reason {
                UndefinedCorrelation::TooFewPoints => "fewer than 2 sampled points",
                UndefinedCorrelation::ZeroVariance => "no variance in the sample",
            };
            format!("Length vs helpfulness correlation: undefined ({why}; sample of {sampled})\n")
        }
    }
}

/// Sentiment tallies over the sample.
pub fn render_sentiment(summary: &SentimentSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Sentiment (sample of {})",
        format_count_with_commas(summary.sampled)
    );
    let _ = writeln!(out, "  positive: {}", summary.positive);
    let _ = writeln!(out, "  negative: {}", summary.negative);
    let _ = writeln!(out, "  neutral:  {}", summary.neutral);
    out
}

/// Rating/sentiment disagreement block with first examples.
pub fn render_mismatches(report: &MismatchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Found {} 5-star reviews with negative sentiment",
        report.negative_high_rated
    );
    let _ = writeln!(
        out,
        "Found {} 1-star reviews with positive sentiment",
        report.positive_low_rated
    );
    if let Some(example) = &report.negative_high_example {
        let _ = writeln!(out, "  example (row {}): {}", example.row, example.excerpt);
    }
    if let Some(example) = &report.positive_low_example {
        let _ = writeln!(out, "  example (row {}): {}", example.row, example.excerpt);
    }
    out
}

/// Join every present section of the report, in pipeline order.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut sections = vec![render_overview(&report.overview)];
    if let Some(ratings) = &report.ratings {
        sections.push(render_ratings(ratings));
    }
    if let Some(helpfulness) = &report.helpfulness {
        sections.push(render_helpfulness(helpfulness));
    }
    if let Some(correlation) = &report.correlation {
        sections.push(render_correlation(correlation));
    }
    if let Some(sentiment) = &report.sentiment {
        sections.push(render_sentiment(sentiment));
    }
    if let Some(mismatches) = &report.mismatches {
        sections.push(render_mismatches(mismatches));
    }
    sections.join("\n")
}
