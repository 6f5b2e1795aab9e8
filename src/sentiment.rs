//! Lexicon sentiment scoring.
//!
//! Deliberately a coarse heuristic, not a model: two fixed word lists, tallied
//! by case-insensitive substring containment. The matching semantics are load
//! bearing for classification compatibility; do not "improve" them into
//! whole-word matches.

use rand::Rng;
use rand::seq::index;

use crate::constants::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::constants::report::EXCERPT_MAX_CHARS;
use crate::data::{MismatchExample, MismatchReport, SentimentLabel, SentimentSummary, WorkingSet};
use crate::features::text_of;

/// Classify one review body.
///
/// Tallies how many words of each lexicon occur anywhere in the lowercased
/// text ("recommend" matches inside "recommended") and compares the tallies;
/// equal tallies, including zero/zero, are neutral. Stateless and
/// order-independent across records.
pub fn classify(text: &str) -> SentimentLabel {
    let lowered = text.to_lowercase();
    let positive = POSITIVE_WORDS
        .iter()
        .filter(|word| lowered.contains(**word))
        .count();
    let negative = NEGATIVE_WORDS
        .iter()
        .filter(|word| lowered.contains(**word))
        .count();
    if positive > negative {
        SentimentLabel::Positive
    } else if negative > positive {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Classify a bounded random sample of the working set and tally per label.
///
/// Samples `min(cap, len)` records uniformly without replacement; the labels
/// are written back onto the sampled records so a front-end can display them.
pub fn summarize<R: Rng + ?Sized>(
    working_set: &mut WorkingSet,
    cap: usize,
    rng: &mut R,
) -> SentimentSummary {
    let amount = cap.min(working_set.records.len());
    let picked = index::sample(rng, working_set.records.len(), amount);
    let mut summary = SentimentSummary {
        sampled: amount,
        ..SentimentSummary::default()
    };
    for idx in picked {
        let label = classify(text_of(&working_set.records[idx]));
        working_set.records[idx].sentiment = Some(label);
        match label {
            SentimentLabel::Positive => summary.positive += 1,
            SentimentLabel::Negative => summary.negative += 1,
            SentimentLabel::Neutral => summary.neutral += 1,
        }
    }
    summary
}

/// Count records whose star rating and sentiment label disagree: 5-star
/// reviews classified negative and 1-star reviews classified positive.
///
/// Only records that were actually classified participate; under the
/// dashboard profile that is the sentiment sample, under the exploratory
/// profile the whole capped set. The first example of each kind is kept
/// with a truncated excerpt.
pub fn rating_sentiment_mismatches(working_set: &WorkingSet) -> MismatchReport {
    let mut report = MismatchReport::default();
    for (row, record) in working_set.records.iter().enumerate() {
        let (Some(score), Some(label)) = (record.score, record.sentiment) else {
            continue;
        };
        if score == 5 && label == SentimentLabel::Negative {
            report.negative_high_rated += 1;
            if report.negative_high_example.is_none() {
                report.negative_high_example = Some(example_at(row, text_of(record)));
            }
        } else if score == 1 && label == SentimentLabel::Positive {
            report.positive_low_rated += 1;
            if report.positive_low_example.is_none() {
                report.positive_low_example = Some(example_at(row, text_of(record)));
            }
        }
    }
    report
}

fn example_at(row: usize, text: &str) -> MismatchExample {
    MismatchExample {
        row,
        excerpt: text.chars().take(EXCERPT_MAX_CHARS).collect(),
    }
}
