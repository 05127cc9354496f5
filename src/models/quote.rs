use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ServiceType — Category of roofing work quoted
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Roof Replacement")]
    RoofReplacement,
    #[serde(rename = "Repair")]
    Repair,
    #[serde(rename = "Gutter Installation")]
    GutterInstallation,
    #[serde(rename = "Inspection")]
    Inspection,
}

impl ServiceType {
    /// Every service type, in display order.
    pub const ALL: [ServiceType; 4] = [
        ServiceType::RoofReplacement,
        ServiceType::Repair,
        ServiceType::GutterInstallation,
        ServiceType::Inspection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::RoofReplacement => "Roof Replacement",
            ServiceType::Repair => "Repair",
            ServiceType::GutterInstallation => "Gutter Installation",
            ServiceType::Inspection => "Inspection",
        }
    }

    /// Typical price before per-job variance is applied.
    pub fn base_price(&self) -> f64 {
        match self {
            ServiceType::RoofReplacement => 12_000.0,
            ServiceType::Repair => 850.0,
            ServiceType::GutterInstallation => 1_500.0,
            ServiceType::Inspection => 250.0,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuoteStatus — Outcome of a quote (fixed at creation)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 4] = [
        QuoteStatus::Pending,
        QuoteStatus::Accepted,
        QuoteStatus::Rejected,
        QuoteStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "Pending",
            QuoteStatus::Accepted => "Accepted",
            QuoteStatus::Rejected => "Rejected",
            QuoteStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Quote — One generated price estimate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub customer_name: String,
    pub address: String,
    pub service_type: ServiceType,
    pub quote_amount: f64,
    pub date: NaiveDate,
    pub status: QuoteStatus,
    pub roof_size_sq_ft: f64,
}

impl Quote {
    pub fn is_accepted(&self) -> bool {
        self.status == QuoteStatus::Accepted
    }
}
