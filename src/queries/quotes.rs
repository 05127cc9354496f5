//! Quote table queries: recent rows and free-text search.

use crate::models::Quote;

pub struct QuoteQuery<'a> {
    quotes: &'a [Quote],
}

impl<'a> QuoteQuery<'a> {
    pub fn new(quotes: &'a [Quote]) -> Self {
        Self { quotes }
    }

    /// The first `limit` quotes in input order.
    ///
    /// The snapshot arrives newest first, so this is the most recent activity.
    pub fn recent(&self, limit: usize) -> Vec<Quote> {
        self.quotes.iter().take(limit).cloned().collect()
    }

    /// Case-insensitive substring match on quote id or customer name.
    ///
    /// A blank term matches everything. Input order is preserved.
    pub fn search(&self, term: &str) -> Vec<Quote> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.quotes.to_vec();
        }
        self.quotes
            .iter()
            .filter(|q| {
                q.id.to_lowercase().contains(&needle)
                    || q.customer_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&'a Quote> {
        self.quotes.iter().find(|q| q.id == id)
    }
}
