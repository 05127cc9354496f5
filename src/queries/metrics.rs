//! Stat card metrics.

use crate::models::{DashboardMetrics, Quote};

/// Computes summary statistics over a quote collection.
///
/// Empty input yields all-zero metrics; no division by zero is attempted.
pub struct MetricsQuery<'a> {
    quotes: &'a [Quote],
}

impl<'a> MetricsQuery<'a> {
    pub fn new(quotes: &'a [Quote]) -> Self {
        Self { quotes }
    }

    pub fn total_revenue(&self) -> f64 {
        self.quotes.iter().map(|q| q.quote_amount).sum()
    }

    pub fn total_quotes(&self) -> usize {
        self.quotes.len()
    }

    pub fn average_quote_value(&self) -> f64 {
        match self.quotes.len() {
            0 => 0.0,
            n => self.total_revenue() / n as f64,
        }
    }

    /// Share of quotes with status `Accepted`, as a percentage.
    pub fn acceptance_rate(&self) -> f64 {
        match self.quotes.len() {
            0 => 0.0,
            n => {
                let accepted = self.quotes.iter().filter(|q| q.is_accepted()).count();
                accepted as f64 / n as f64 * 100.0
            }
        }
    }

    pub fn compute(&self) -> DashboardMetrics {
        DashboardMetrics {
            total_revenue: self.total_revenue(),
            total_quotes: self.total_quotes(),
            average_quote_value: self.average_quote_value(),
            acceptance_rate: self.acceptance_rate(),
        }
    }
}
