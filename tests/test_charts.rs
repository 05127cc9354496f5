//! Chart series aggregation.

mod common;

use common::{date, quote, sample_quotes};
use quotebot_dashboard::models::{QuoteStatus, ServiceType};
use quotebot_dashboard::queries::ChartQuery;

#[test]
fn revenue_by_day_is_sorted_ascending_with_labels() {
    let quotes = sample_quotes();
    let series = ChartQuery::new(&quotes).revenue_by_day();

    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Jan 20", "Feb 20", "Mar 8", "Mar 14", "Mar 15"]);

    let mar14 = &series[3];
    assert_eq!(mar14.date, date(2024, 3, 14));
    assert_eq!(mar14.revenue, 1_150.0);
    assert_eq!(mar14.count, 2);
}

#[test]
fn daily_order_does_not_depend_on_input_order() {
    let quotes = sample_quotes();
    let mut shuffled = quotes.clone();
    shuffled.swap(0, 4);
    shuffled.swap(1, 5);

    assert_eq!(
        ChartQuery::new(&quotes).revenue_by_day(),
        ChartQuery::new(&shuffled).revenue_by_day()
    );
    assert_eq!(
        ChartQuery::new(&quotes).count_by_day(),
        ChartQuery::new(&shuffled).count_by_day()
    );
}

#[test]
fn service_counts_sum_to_total_and_skip_absent_types() {
    let d = date(2024, 3, 1);
    let quotes = vec![
        quote("Q-1", "A", ServiceType::Inspection, 250.0, d, QuoteStatus::Pending),
        quote("Q-2", "B", ServiceType::Repair, 850.0, d, QuoteStatus::Pending),
        quote("Q-3", "C", ServiceType::Inspection, 250.0, d, QuoteStatus::Pending),
    ];
    let counts = ChartQuery::new(&quotes).count_by_service();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].service_type, ServiceType::Repair);
    assert_eq!(counts[0].count, 1);
    assert_eq!(counts[1].service_type, ServiceType::Inspection);
    assert_eq!(counts[1].count, 2);
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), quotes.len());
}

#[test]
fn count_by_day_counts_each_date() {
    let quotes = sample_quotes();
    let volume = ChartQuery::new(&quotes).count_by_day();
    assert_eq!(volume.len(), 5);
    assert_eq!(volume.iter().map(|p| p.count).sum::<usize>(), quotes.len());
    assert_eq!(volume.last().unwrap().label, "Mar 15");
}

#[test]
fn empty_input_yields_empty_series() {
    let charts = ChartQuery::new(&[]);
    assert!(charts.revenue_by_day().is_empty());
    assert!(charts.count_by_service().is_empty());
    assert!(charts.count_by_day().is_empty());
}
