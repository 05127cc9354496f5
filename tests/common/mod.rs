//! Shared fixtures for the dashboard integration tests.
//!
//! Provides a compact quote constructor, a fixed reference date, and
//! `CountingProvider`, an [`InsightProvider`] that records every call
//! instead of touching the network.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use quotebot_dashboard::models::{Quote, QuoteStatus, ServiceType};
use quotebot_dashboard::{DashboardError, InsightProvider, Result};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference "today" used across tests.
pub fn today() -> NaiveDate {
    date(2024, 3, 15)
}

pub fn quote(
    id: &str,
    customer: &str,
    service: ServiceType,
    amount: f64,
    on: NaiveDate,
    status: QuoteStatus,
) -> Quote {
    Quote {
        id: id.to_string(),
        customer_name: customer.to_string(),
        address: format!("{} Maple St", 100 + id.len()),
        service_type: service,
        quote_amount: amount,
        date: on,
        status,
        roof_size_sq_ft: 2000.0,
    }
}

/// A small history spanning ~60 days, newest first.
pub fn sample_quotes() -> Vec<Quote> {
    vec![
        quote("Q-1000", "Jane Doe", ServiceType::RoofReplacement, 12_400.0, date(2024, 3, 15), QuoteStatus::Accepted),
        quote("Q-1001", "Bob Stone", ServiceType::Repair, 900.0, date(2024, 3, 14), QuoteStatus::Pending),
        quote("Q-1002", "Jane Doe", ServiceType::Inspection, 250.0, date(2024, 3, 14), QuoteStatus::Rejected),
        quote("Q-1003", "Ann Lee", ServiceType::GutterInstallation, 1_500.0, date(2024, 3, 8), QuoteStatus::Completed),
        quote("Q-1004", "Ann Lee", ServiceType::Repair, 800.0, date(2024, 2, 20), QuoteStatus::Accepted),
        quote("Q-1005", "Carl Ray", ServiceType::RoofReplacement, 11_000.0, date(2024, 1, 20), QuoteStatus::Pending),
    ]
}

// ---------------------------------------------------------------------------
// CountingProvider
// ---------------------------------------------------------------------------

pub enum Reply {
    Text(String),
    Fail,
}

pub struct CountingProvider {
    configured: bool,
    reply: Reply,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl CountingProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            configured: true,
            reply: Reply::Text(text.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Reply::Fail,
            ..Self::replying("")
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::replying("<ul><li>never sent</li></ul>")
        }
    }

    /// Shared call counter, usable after the provider is moved into a panel.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

impl InsightProvider for CountingProvider {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn generate(&self, _model: &str, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(DashboardError::Service {
                status: 503,
                message: "unavailable".to_string(),
            }),
        }
    }
}

pub fn call_count(calls: &Arc<AtomicUsize>) -> usize {
    calls.load(Ordering::SeqCst)
}
