//! Notifications derived from the quote history and business settings.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::format;
use crate::models::{Quote, QuoteStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub quote_id: String,
    pub date: NaiveDate,
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

/// Build up to `limit` notifications, newest quote first.
///
/// A single quote may raise more than one notification (e.g. a high-value
/// quote that also needs approval). Ties on date keep input order.
pub fn derive(quotes: &[Quote], settings: &Settings, limit: usize) -> Vec<Notification> {
    let mut ordered: Vec<&Quote> = quotes.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    let mut out = Vec::new();
    for quote in ordered {
        if quote.quote_amount >= settings.high_value_threshold {
            out.push(Notification {
                quote_id: quote.id.clone(),
                date: quote.date,
                severity: Severity::Success,
                title: "New High-Value Quote Generated".to_string(),
                description: format!(
                    "A {} quote for {} was generated for customer {}.",
                    quote.service_type.as_str().to_lowercase(),
                    format::currency(quote.quote_amount),
                    quote.customer_name
                ),
            });
        }
        if quote.status == QuoteStatus::Pending && settings.requires_approval(quote.quote_amount)
        {
            out.push(Notification {
                quote_id: quote.id.clone(),
                date: quote.date,
                severity: Severity::Warning,
                title: "Manual Approval Required".to_string(),
                description: format!(
                    "Quote #{} for {} exceeds the {} approval threshold.",
                    quote.id,
                    format::currency(quote.quote_amount),
                    format::currency(settings.approval_threshold)
                ),
            });
        }
        if quote.status == QuoteStatus::Rejected {
            out.push(Notification {
                quote_id: quote.id.clone(),
                date: quote.date,
                severity: Severity::Error,
                title: "Quote Rejected".to_string(),
                description: format!(
                    "Customer {} rejected quote #{}.",
                    quote.customer_name, quote.id
                ),
            });
        }
        if out.len() >= limit {
            break;
        }
    }

    out.truncate(limit);
    out
}
