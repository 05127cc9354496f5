//! Stat card metrics.

mod common;

use common::{date, quote, sample_quotes};
use quotebot_dashboard::models::{QuoteStatus, ServiceType};
use quotebot_dashboard::queries::MetricsQuery;

#[test]
fn metrics_for_three_quotes() {
    let d = date(2024, 3, 1);
    let quotes = vec![
        quote("Q-1", "A", ServiceType::Repair, 100.0, d, QuoteStatus::Accepted),
        quote("Q-2", "B", ServiceType::Repair, 200.0, d, QuoteStatus::Pending),
        quote("Q-3", "C", ServiceType::Repair, 300.0, d, QuoteStatus::Accepted),
    ];

    let m = MetricsQuery::new(&quotes).compute();
    assert_eq!(m.total_revenue, 600.0);
    assert_eq!(m.total_quotes, 3);
    assert_eq!(m.average_quote_value, 200.0);
    assert!((m.acceptance_rate - 66.666_666).abs() < 1e-3);
}

#[test]
fn empty_input_is_all_zero() {
    let m = MetricsQuery::new(&[]).compute();
    assert_eq!(m.total_revenue, 0.0);
    assert_eq!(m.total_quotes, 0);
    assert_eq!(m.average_quote_value, 0.0);
    assert_eq!(m.acceptance_rate, 0.0);
    assert!(!m.average_quote_value.is_nan());
    assert!(!m.acceptance_rate.is_nan());
}

#[test]
fn total_revenue_is_sum_of_amounts() {
    let quotes = sample_quotes();
    let expected: f64 = quotes.iter().map(|q| q.quote_amount).sum();
    assert_eq!(MetricsQuery::new(&quotes).total_revenue(), expected);
}

#[test]
fn completed_quotes_are_not_counted_as_accepted() {
    let d = date(2024, 3, 1);
    let quotes = vec![
        quote("Q-1", "A", ServiceType::Repair, 100.0, d, QuoteStatus::Completed),
        quote("Q-2", "B", ServiceType::Repair, 100.0, d, QuoteStatus::Rejected),
    ];
    assert_eq!(MetricsQuery::new(&quotes).acceptance_rate(), 0.0);
}
