//! Aggregate summaries over a derived working set.
//!
//! Every summary is recomputed in full per run; nothing here mutates the
//! working set or carries state between calls.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::index;

use crate::constants::correlation::{NEGATIVE_BAND_THRESHOLD, POSITIVE_BAND_THRESHOLD};
use crate::data::{
    CorrelationOutcome, HelpfulnessRow, HelpfulnessSummary, LengthEffect, RatingDistribution,
    RatingRow, UndefinedCorrelation, WorkingSet,
};

/// Count and percentage per distinct rating, ascending, plus mean and mode.
///
/// Returns `None` when no record carries a score; the mean is undefined on an
/// empty group and callers must not guess one.
pub fn rating_distribution(working_set: &WorkingSet) -> Option<RatingDistribution> {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    let mut sum = 0u64;
    for record in &working_set.records {
        if let Some(score) = record.score {
            *counts.entry(score).or_insert(0) += 1;
            sum += u64::from(score);
        }
    }
    let total: usize = counts.values().sum();
    if total == 0 {
        return None;
    }
    let rows: Vec<RatingRow> = counts
        .iter()
        .map(|(&rating, &count)| RatingRow {
            rating,
            count,
            percentage: round1(count as f64 / total as f64 * 100.0),
        })
        .collect();
    // Ascending iteration + strict comparison resolves count ties to the
    // lowest rating, matching the original's idxmax over a sorted series.
    let mut most_common = rows[0].rating;
    let mut best = 0usize;
    for (&rating, &count) in &counts {
        if count > best {
            best = count;
            most_common = rating;
        }
    }
    Some(RatingDistribution {
        rows,
        mean: sum as f64 / total as f64,
        most_common,
        total,
    })
}

/// Overall and per-rating helpfulness means.
///
/// Returns `None` when no record carries a derived ratio. Rating groups with
/// zero records are absent from `by_rating`, never zero-filled; the grouped
/// table is empty when the score column is missing.
pub fn helpfulness_summary(working_set: &WorkingSet) -> Option<HelpfulnessSummary> {
    let mut sum = 0.0f64;
    let mut count = 0usize;
    let mut helpful_count = 0usize;
    let mut groups: BTreeMap<u8, (f64, usize)> = BTreeMap::new();
    for record in &working_set.records {
        let Some(ratio) = record.helpfulness_ratio else {
            continue;
        };
        sum += ratio;
        count += 1;
        if ratio > 0.0 {
            helpful_count += 1;
        }
        if let Some(score) = record.score {
            let entry = groups.entry(score).or_insert((0.0, 0));
            entry.0 += ratio;
            entry.1 += 1;
        }
    }
    if count == 0 {
        return None;
    }
    let by_rating = groups
        .into_iter()
        .map(|(rating, (group_sum, group_count))| HelpfulnessRow {
            rating,
            mean_ratio: group_sum / group_count as f64,
        })
        .collect();
    Some(HelpfulnessSummary {
        mean_ratio: sum / count as f64,
        helpful_count,
        by_rating,
    })
}

/// Pearson correlation between review length and helpfulness ratio over a
/// bounded uniform sample without replacement.
///
/// At most `min(cap, eligible)` records participate. Fewer than 2 points or
/// zero variance in either variable yields an `Undefined` outcome that the
/// caller must check before formatting; it is never folded into a band.
pub fn length_correlation<R: Rng + ?Sized>(
    working_set: &WorkingSet,
    cap: usize,
    rng: &mut R,
) -> CorrelationOutcome {
    let eligible: Vec<(f64, f64)> = working_set
        .records
        .iter()
        .filter_map(|record| {
            Some((record.review_length? as f64, record.helpfulness_ratio?))
        })
        .collect();
    let amount = cap.min(eligible.len());
    if amount < 2 {
        return CorrelationOutcome::Undefined {
            reason: UndefinedCorrelation::TooFewPoints,
            sampled: amount,
        };
    }
    let picked = index::sample(rng, eligible.len(), amount);
    let mut xs = Vec::with_capacity(amount);
    let mut ys = Vec::with_capacity(amount);
    for idx in picked {
        let (x, y) = eligible[idx];
        xs.push(x);
        ys.push(y);
    }
    match pearson(&xs, &ys) {
        Some(coefficient) => CorrelationOutcome::Defined {
            coefficient,
            effect: length_effect(coefficient),
            sampled: amount,
        },
        None => CorrelationOutcome::Undefined {
            reason: UndefinedCorrelation::ZeroVariance,
            sampled: amount,
        },
    }
}

/// Fixed-threshold band for a defined coefficient: above 0.3, below -0.3, or
/// in between. The thresholds are exact policy, not approximations.
pub fn length_effect(coefficient: f64) -> LengthEffect {
    if coefficient > POSITIVE_BAND_THRESHOLD {
        LengthEffect::LongerMoreHelpful
    } else if coefficient < NEGATIVE_BAND_THRESHOLD {
        LengthEffect::ShorterMoreHelpful
    } else {
        LengthEffect::NoStrongEffect
    }
}

fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }
    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0 {
        return None;
    }
    Some(covariance / denominator)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ColumnSet, ReviewRecord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scored(score: u8) -> ReviewRecord {
        ReviewRecord {
            score: Some(score),
            ..ReviewRecord::default()
        }
    }

    fn derived(score: u8, length: usize, ratio: f64) -> ReviewRecord {
        ReviewRecord {
            score: Some(score),
            review_length: Some(length),
            helpfulness_ratio: Some(ratio),
            ..ReviewRecord::default()
        }
    }

    fn working_set(records: Vec<ReviewRecord>) -> WorkingSet {
        WorkingSet::new(
            ColumnSet {
                score: true,
                text: true,
                helpfulness: true,
                ..ColumnSet::default()
            },
            records,
        )
    }

    #[test]
    fn distribution_counts_ascending_with_rounded_percentages() {
        let set = working_set(vec![scored(5), scored(1), scored(5), scored(3)]);
        let dist = rating_distribution(&set).expect("scores present");

        assert_eq!(dist.total, 4);
        assert_eq!(dist.mean, 3.5);
        assert_eq!(dist.most_common, 5);
        let ratings: Vec<u8> = dist.rows.iter().map(|row| row.rating).collect();
        assert_eq!(ratings, vec![1, 3, 5]);
        assert_eq!(dist.rows[2].percentage, 50.0);
    }

    #[test]
    fn distribution_percentages_sum_to_one_hundred() {
        let set = working_set(vec![
            scored(1),
            scored(2),
            scored(2),
            scored(4),
            scored(4),
            scored(4),
            scored(5),
        ]);
        let dist = rating_distribution(&set).expect("scores present");
        let sum: f64 = dist.rows.iter().map(|row| row.percentage).sum();
        let tolerance = 0.1 * dist.rows.len() as f64;
        assert!((sum - 100.0).abs() <= tolerance, "sum was {sum}");
    }

    #[test]
    fn mode_ties_resolve_to_lowest_rating() {
        let set = working_set(vec![scored(2), scored(4), scored(2), scored(4)]);
        let dist = rating_distribution(&set).expect("scores present");
        assert_eq!(dist.most_common, 2);
    }

    #[test]
    fn empty_set_has_no_distribution() {
        let set = working_set(Vec::new());
        assert!(rating_distribution(&set).is_none());
    }

    #[test]
    fn helpfulness_groups_skip_absent_ratings() {
        let set = working_set(vec![
            derived(5, 100, 1.0),
            derived(5, 50, 0.5),
            derived(1, 80, 0.0),
        ]);
        let summary = helpfulness_summary(&set).expect("ratios present");

        assert_eq!(summary.mean_ratio, 0.5);
        assert_eq!(summary.helpful_count, 2);
        let ratings: Vec<u8> = summary.by_rating.iter().map(|row| row.rating).collect();
        assert_eq!(ratings, vec![1, 5]);
        assert_eq!(summary.by_rating[1].mean_ratio, 0.75);
    }

    #[test]
    fn grouped_table_empty_without_scores() {
        let mut set = working_set(vec![derived(3, 10, 0.4)]);
        set.records[0].score = None;
        let summary = helpfulness_summary(&set).expect("ratio present");
        assert!(summary.by_rating.is_empty());
    }

    #[test]
    fn correlation_detects_a_positive_effect() {
        let records = (0..50)
            .map(|i| derived(3, 10 * (i + 1), (i as f64 + 1.0) / 50.0))
            .collect();
        let set = working_set(records);
        let mut rng = StdRng::seed_from_u64(5);
        match length_correlation(&set, 1_000, &mut rng) {
            CorrelationOutcome::Defined {
                coefficient,
                effect,
                sampled,
            } => {
                assert!(coefficient > 0.99);
                assert_eq!(effect, LengthEffect::LongerMoreHelpful);
                assert_eq!(sampled, 50);
            }
            other => panic!("expected defined outcome, got {other:?}"),
        }
    }

    #[test]
    fn correlation_sample_never_exceeds_cap() {
        let records = (0..200)
            .map(|i| derived(3, i + 1, ((i * 7) % 11) as f64 / 11.0))
            .collect();
        let set = working_set(records);
        let mut rng = StdRng::seed_from_u64(9);
        match length_correlation(&set, 64, &mut rng) {
            CorrelationOutcome::Defined { sampled, .. }
            | CorrelationOutcome::Undefined { sampled, .. } => assert_eq!(sampled, 64),
        }
    }

    #[test]
    fn zero_variance_is_undefined_not_banded() {
        // Single distinct length: variance of x is zero.
        let records = (0..10).map(|i| derived(4, 25, i as f64 / 10.0)).collect();
        let set = working_set(records);
        let mut rng = StdRng::seed_from_u64(2);
        match length_correlation(&set, 1_000, &mut rng) {
            CorrelationOutcome::Undefined { reason, sampled } => {
                assert_eq!(reason, UndefinedCorrelation::ZeroVariance);
                assert_eq!(sampled, 10);
            }
            other => panic!("expected undefined outcome, got {other:?}"),
        }
    }

    #[test]
    fn single_point_is_too_few() {
        let set = working_set(vec![derived(5, 10, 1.0)]);
        let mut rng = StdRng::seed_from_u64(2);
        match length_correlation(&set, 1_000, &mut rng) {
            CorrelationOutcome::Undefined { reason, .. } => {
                assert_eq!(reason, UndefinedCorrelation::TooFewPoints)
            }
            other => panic!("expected undefined outcome, got {other:?}"),
        }
    }

    #[test]
    fn effect_bands_use_exact_thresholds() {
        assert_eq!(length_effect(0.31), LengthEffect::LongerMoreHelpful);
        assert_eq!(length_effect(0.3), LengthEffect::NoStrongEffect);
        assert_eq!(length_effect(-0.3), LengthEffect::NoStrongEffect);
        assert_eq!(length_effect(-0.31), LengthEffect::ShorterMoreHelpful);
    }
}
