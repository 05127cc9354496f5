//! Trailing time-range filter.

mod common;

use common::{date, sample_quotes, today};
use quotebot_dashboard::TimeRange;

#[test]
fn seven_day_window_includes_cutoff_date() {
    let quotes = sample_quotes();
    // Cutoff for 2024-03-15 is 2024-03-08, which is included.
    let ids: Vec<String> = TimeRange::Last7Days
        .filter(&quotes, today())
        .into_iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(ids, vec!["Q-1000", "Q-1001", "Q-1002", "Q-1003"]);
}

#[test]
fn filter_matches_cutoff_predicate_for_every_range() {
    let quotes = sample_quotes();
    for range in TimeRange::ALL {
        let cutoff = range.cutoff(today());
        let expected: Vec<_> = quotes.iter().filter(|q| q.date >= cutoff).cloned().collect();
        assert_eq!(range.filter(&quotes, today()), expected, "range {}", range.code());
    }
}

#[test]
fn filter_is_idempotent() {
    let quotes = sample_quotes();
    for range in TimeRange::ALL {
        let once = range.filter(&quotes, today());
        let twice = range.filter(&once, today());
        assert_eq!(once, twice);
    }
}

#[test]
fn filter_preserves_input_order() {
    let mut quotes = sample_quotes();
    quotes.reverse();
    let filtered = TimeRange::Last90Days.filter(&quotes, today());
    assert_eq!(filtered, quotes);
}

#[test]
fn empty_window_returns_empty_collection() {
    let quotes = sample_quotes();
    let far_future = date(2030, 1, 1);
    assert!(TimeRange::Last90Days.filter(&quotes, far_future).is_empty());
}

#[test]
fn parses_codes_and_rejects_unknown() {
    assert_eq!("7d".parse::<TimeRange>().unwrap(), TimeRange::Last7Days);
    assert_eq!("30D".parse::<TimeRange>().unwrap(), TimeRange::Last30Days);
    assert_eq!("90".parse::<TimeRange>().unwrap(), TimeRange::Last90Days);
    assert!("14d".parse::<TimeRange>().is_err());
    assert_eq!(TimeRange::default(), TimeRange::Last30Days);
    assert_eq!(TimeRange::Last90Days.label(), "Last 90 Days");
}
