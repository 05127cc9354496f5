//! Page selection and per-page data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::DashboardError;
use crate::models::{
    ClientSummary, DashboardMetrics, Quote, RevenuePoint, RosterStats, ServiceCount, VolumePoint,
};
use crate::notifications::Notification;

// ---------------------------------------------------------------------------
// View — which page is shown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Quotes,
    Clients,
    Analytics,
    Settings,
    Notifications,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Dashboard,
        View::Quotes,
        View::Clients,
        View::Analytics,
        View::Settings,
        View::Notifications,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard Overview",
            View::Quotes => "Quote Management",
            View::Clients => "Client Database",
            View::Analytics => "Performance Analytics",
            View::Settings => "System Settings",
            View::Notifications => "Notifications",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            View::Dashboard => {
                "Welcome back, here's what's happening with your quotebot today."
            }
            _ => "Manage and track your roofing business.",
        }
    }

    /// Pages whose content depends on the selected time range.
    pub fn shows_time_filter(&self) -> bool {
        matches!(self, View::Dashboard | View::Analytics | View::Quotes)
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Quotes => "quotes",
            View::Clients => "clients",
            View::Analytics => "analytics",
            View::Settings => "settings",
            View::Notifications => "notifications",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for View {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        View::ALL
            .iter()
            .copied()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| DashboardError::InvalidArgument(format!("unknown view '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// Page — derived data for the selected view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "view")]
pub enum Page {
    #[serde(rename_all = "camelCase")]
    Dashboard {
        metrics: DashboardMetrics,
        revenue_trend: Vec<RevenuePoint>,
        service_distribution: Vec<ServiceCount>,
        recent_quotes: Vec<Quote>,
        volume: Vec<VolumePoint>,
    },
    Quotes {
        quotes: Vec<Quote>,
    },
    Clients {
        stats: RosterStats,
        clients: Vec<ClientSummary>,
    },
    #[serde(rename_all = "camelCase")]
    Analytics {
        revenue_trend: Vec<RevenuePoint>,
        service_distribution: Vec<ServiceCount>,
        volume: Vec<VolumePoint>,
    },
    Settings {
        settings: Settings,
    },
    Notifications {
        notifications: Vec<Notification>,
    },
}

impl Page {
    pub fn view(&self) -> View {
        match self {
            Page::Dashboard { .. } => View::Dashboard,
            Page::Quotes { .. } => View::Quotes,
            Page::Clients { .. } => View::Clients,
            Page::Analytics { .. } => View::Analytics,
            Page::Settings { .. } => View::Settings,
            Page::Notifications { .. } => View::Notifications,
        }
    }
}
