//! Client roster derived from the quote history.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{ClientStatus, ClientSummary, Quote, RosterStats};

/// Groups quotes by customer name.
///
/// The roster is meant to be built from the full, unfiltered snapshot so the
/// client list does not shrink when the header time range changes.
pub struct ClientQuery<'a> {
    quotes: &'a [Quote],
}

impl<'a> ClientQuery<'a> {
    pub fn new(quotes: &'a [Quote]) -> Self {
        Self { quotes }
    }

    /// One entry per distinct customer, in order of first appearance.
    pub fn roster(&self) -> Vec<ClientSummary> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut roster: Vec<ClientSummary> = Vec::new();

        for quote in self.quotes {
            let slot = *index.entry(quote.customer_name.as_str()).or_insert_with(|| {
                roster.push(ClientSummary {
                    name: quote.customer_name.clone(),
                    address: quote.address.clone(),
                    total_spent: 0.0,
                    quotes_count: 0,
                    first_active: quote.date,
                    last_active: quote.date,
                    status: ClientStatus::Active,
                });
                roster.len() - 1
            });

            let client = &mut roster[slot];
            client.total_spent += quote.quote_amount;
            client.quotes_count += 1;
            client.first_active = client.first_active.min(quote.date);
            client.last_active = client.last_active.max(quote.date);
        }

        roster
    }

    /// Headline numbers for the roster page.
    ///
    /// A client counts as new this month when their earliest quote falls in
    /// the same calendar month as `today`.
    pub fn stats(&self, today: NaiveDate) -> RosterStats {
        let roster = self.roster();
        roster_stats(&roster, today)
    }
}

pub fn roster_stats(roster: &[ClientSummary], today: NaiveDate) -> RosterStats {
    if roster.is_empty() {
        return RosterStats::default();
    }

    let new_this_month = roster
        .iter()
        .filter(|c| {
            c.first_active.year() == today.year() && c.first_active.month() == today.month()
        })
        .count();
    let lifetime_total: f64 = roster.iter().map(|c| c.total_spent).sum();

    RosterStats {
        total_clients: roster.len(),
        new_this_month,
        average_lifetime_value: lifetime_total / roster.len() as f64,
    }
}
