//! Immutable quote snapshot shared by every derived view.
//!
//! The snapshot is created once at startup (from the mock generator or a
//! JSON file) and validated on construction. Nothing mutates it afterwards;
//! filtered views borrow from it and derived aggregates are recomputed on
//! demand.

use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, Read};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use flate2::read::GzDecoder;

use crate::error::{DashboardError, Result};
use crate::models::Quote;

/// Validated, read-only collection of quotes.
///
/// Cloning is cheap: clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct QuoteDataset {
    quotes: Arc<[Quote]>,
}

impl QuoteDataset {
    /// Build a snapshot, checking id uniqueness and positive amounts/areas.
    pub fn new(quotes: Vec<Quote>) -> Result<Self> {
        validate(&quotes)?;
        Ok(Self {
            quotes: quotes.into(),
        })
    }

    /// An empty snapshot. Every derived view renders its empty state.
    pub fn empty() -> Self {
        Self {
            quotes: Arc::from(Vec::new()),
        }
    }

    /// Load a JSON array of quotes (handles `.gz` transparently).
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(path)?;
            let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
            let mut contents = String::new();
            decoder.read_to_string(&mut contents)?;
            contents
        } else {
            fs::read_to_string(path)?
        };
        let dataset = Self::from_json_str(&contents)?;
        tracing::info!(
            "Loaded {} quotes from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let quotes: Vec<Quote> = serde_json::from_str(json)?;
        Self::new(quotes)
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
}

impl Deref for QuoteDataset {
    type Target = [Quote];

    fn deref(&self) -> &[Quote] {
        &self.quotes
    }
}

fn validate(quotes: &[Quote]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(quotes.len());
    for quote in quotes {
        if !seen.insert(quote.id.as_str()) {
            return Err(DashboardError::InvalidDataset(format!(
                "duplicate quote id {}",
                quote.id
            )));
        }
        if !quote.quote_amount.is_finite() || quote.quote_amount <= 0.0 {
            return Err(DashboardError::InvalidDataset(format!(
                "quote {} has non-positive amount {}",
                quote.id, quote.quote_amount
            )));
        }
        if !quote.roof_size_sq_ft.is_finite() || quote.roof_size_sq_ft <= 0.0 {
            return Err(DashboardError::InvalidDataset(format!(
                "quote {} has non-positive roof size {}",
                quote.id, quote.roof_size_sq_ft
            )));
        }
    }
    Ok(())
}
