use reviewlens::{
    AnalysisProfile, Analyzer, ColumnSet, InMemorySource, ReviewRecord, SentimentLabel,
};

fn full_columns() -> ColumnSet {
    ColumnSet {
        score: true,
        text: true,
        helpfulness: true,
        ..ColumnSet::default()
    }
}

fn review(score: u8, text: &str, numerator: u32, denominator: u32) -> ReviewRecord {
    ReviewRecord {
        score: Some(score),
        text: Some(text.to_string()),
        helpfulness_numerator: Some(numerator),
        helpfulness_denominator: Some(denominator),
        ..ReviewRecord::default()
    }
}

fn seeded_analyzer() -> Analyzer {
    Analyzer::new(AnalysisProfile {
        seed: Some(42),
        ..AnalysisProfile::dashboard()
    })
}

#[test]
fn two_record_scenario_matches_expected_values() {
    let records = vec![
        review(5, "This is the best product, highly recommend", 10, 10),
        review(1, "Terrible, broken, waste of money", 1, 5),
    ];
    let source = InMemorySource::new("scenario", full_columns(), records);
    let mut analyzer = seeded_analyzer();
    let (working_set, report) = analyzer.run(&source).unwrap();

    assert_eq!(working_set.records[0].helpfulness_ratio, Some(1.0));
    assert_eq!(working_set.records[1].helpfulness_ratio, Some(0.2));
    assert_eq!(
        working_set.records[0].sentiment,
        Some(SentimentLabel::Positive)
    );
    assert_eq!(
        working_set.records[1].sentiment,
        Some(SentimentLabel::Negative)
    );
    let ratings = report.ratings.expect("score column present");
    assert_eq!(ratings.mean, 3.0);
    assert_eq!(ratings.total, 2);

    let sentiment = report.sentiment.expect("text column present");
    assert_eq!(sentiment.sampled, 2);
    assert_eq!(sentiment.positive, 1);
    assert_eq!(sentiment.negative, 1);
    assert_eq!(sentiment.neutral, 0);
}

#[test]
fn zero_denominator_ratio_is_exactly_zero() {
    let records = vec![review(4, "fine", 3, 0)];
    let source = InMemorySource::new("zero_votes", full_columns(), records);
    let mut analyzer = seeded_analyzer();
    let (working_set, report) = analyzer.run(&source).unwrap();

    let ratio = working_set.records[0].helpfulness_ratio.unwrap();
    assert_eq!(ratio, 0.0);
    assert!(!ratio.is_nan());
    // The record still participates in the helpfulness summary.
    let helpfulness = report.helpfulness.expect("helpfulness columns present");
    assert_eq!(helpfulness.mean_ratio, 0.0);
    assert_eq!(helpfulness.helpful_count, 0);
}

#[test]
fn ratios_stay_in_unit_interval_for_all_vote_shapes() {
    let records = vec![
        review(3, "ok", 0, 0),
        review(3, "ok", 0, 9),
        review(3, "ok", 4, 9),
        review(3, "ok", 9, 9),
    ];
    let source = InMemorySource::new("vote_shapes", full_columns(), records);
    let mut analyzer = seeded_analyzer();
    let (working_set, _) = analyzer.run(&source).unwrap();

    for record in &working_set.records {
        let ratio = record.helpfulness_ratio.unwrap();
        assert!((0.0..=1.0).contains(&ratio), "ratio out of range: {ratio}");
    }
}

#[test]
fn missing_text_is_neutral_and_never_panics() {
    let mut record = review(2, "", 0, 0);
    record.text = None;
    let source = InMemorySource::new("missing_text", full_columns(), vec![record]);
    let mut analyzer = seeded_analyzer();
    let (working_set, report) = analyzer.run(&source).unwrap();

    assert_eq!(
        working_set.records[0].sentiment,
        Some(SentimentLabel::Neutral)
    );
    // Coerced placeholder "nan" is 3 characters.
    assert_eq!(working_set.records[0].review_length, Some(3));
    let sentiment = report.sentiment.expect("text column present");
    assert_eq!(sentiment.neutral, 1);
}

#[test]
fn analysis_is_idempotent_over_a_derived_set() {
    let records = vec![
        review(5, "great phone, love it", 2, 3),
        review(2, "poor battery", 0, 1),
    ];
    let source = InMemorySource::new("rerun", full_columns(), records);
    let mut analyzer = seeded_analyzer();
    let (mut working_set, _) = analyzer.run(&source).unwrap();

    let before: Vec<_> = working_set
        .records
        .iter()
        .map(|r| (r.helpfulness_ratio, r.review_length))
        .collect();
    // Second pass over the already-derived set.
    let mut second = Analyzer::new(AnalysisProfile {
        seed: Some(42),
        ..AnalysisProfile::dashboard()
    });
    second.analyze(&mut working_set).unwrap();
    let after: Vec<_> = working_set
        .records
        .iter()
        .map(|r| (r.helpfulness_ratio, r.review_length))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn percentages_sum_to_one_hundred_within_tolerance() {
    let records: Vec<ReviewRecord> = (0..97)
        .map(|i| review(1 + (i % 5) as u8, "fine", 1, 2))
        .collect();
    let source = InMemorySource::new("percentages", full_columns(), records);
    let mut analyzer = seeded_analyzer();
    let (_, report) = analyzer.run(&source).unwrap();

    let ratings = report.ratings.expect("score column present");
    let sum: f64 = ratings.rows.iter().map(|row| row.percentage).sum();
    let tolerance = 0.1 * ratings.rows.len() as f64;
    assert!((sum - 100.0).abs() <= tolerance, "sum was {sum}");
}
