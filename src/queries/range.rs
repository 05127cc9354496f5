//! Trailing-window time range filter.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::models::Quote;

// ---------------------------------------------------------------------------
// TimeRange
// ---------------------------------------------------------------------------

/// Trailing window selectable in the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Last90Days,
    ];

    pub fn days(&self) -> i64 {
        match self {
            TimeRange::Last7Days => 7,
            TimeRange::Last30Days => 30,
            TimeRange::Last90Days => 90,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
            TimeRange::Last90Days => "90d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "Last 7 Days",
            TimeRange::Last30Days => "Last 30 Days",
            TimeRange::Last90Days => "Last 90 Days",
        }
    }

    /// Earliest date still inside the window ending on `today`.
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days())
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.cutoff(today)
    }

    /// Quotes dated on or after the cutoff, in input order.
    ///
    /// Future-dated quotes are kept; the window has no upper bound.
    pub fn filter(&self, quotes: &[Quote], today: NaiveDate) -> Vec<Quote> {
        let cutoff = self.cutoff(today);
        quotes.iter().filter(|q| q.date >= cutoff).cloned().collect()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7d" | "7" => Ok(TimeRange::Last7Days),
            "30d" | "30" => Ok(TimeRange::Last30Days),
            "90d" | "90" => Ok(TimeRange::Last90Days),
            other => Err(DashboardError::InvalidArgument(format!(
                "unknown time range '{}' (expected 7d, 30d or 90d)",
                other
            ))),
        }
    }
}
