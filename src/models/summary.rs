use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::quote::ServiceType;

// ---------------------------------------------------------------------------
// DashboardMetrics — Stat card values for a quote collection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_revenue: f64,
    pub total_quotes: usize,
    pub average_quote_value: f64,
    /// Percentage in `0.0..=100.0`.
    pub acceptance_rate: f64,
}

// ---------------------------------------------------------------------------
// Chart series points
// ---------------------------------------------------------------------------

/// Revenue and quote count for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub date: NaiveDate,
    /// Short axis label, e.g. `"Jan 5"`.
    pub label: String,
    pub revenue: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCount {
    pub service_type: ServiceType,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub label: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// ClientSummary — Per-customer roll-up for the client roster
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub name: String,
    /// Address of the first quote seen for this customer.
    pub address: String,
    pub total_spent: f64,
    pub quotes_count: usize,
    pub first_active: NaiveDate,
    pub last_active: NaiveDate,
    pub status: ClientStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    pub total_clients: usize,
    pub new_this_month: usize,
    pub average_lifetime_value: f64,
}
