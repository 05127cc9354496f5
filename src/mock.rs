//! Mock quote generator.
//!
//! Produces a plausible roofing-quote history for demos and tests: random
//! customers, service mix, prices around each service's base rate, and dates
//! spread over the 30 days before the reference date.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;

use crate::models::{Quote, QuoteStatus, ServiceType};

const FIRST_NAMES: [&str; 10] = [
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];
const STREETS: [&str; 8] = [
    "Maple", "Oak", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill",
];

/// Days back from the reference date that generated quotes may fall on.
pub const MOCK_DAYS_BACK: i64 = 30;

/// Generate `count` quotes dated within the 30 days up to `today`.
///
/// Ids run `Q-1000`, `Q-1001`, ... in generation order; the returned vector
/// is then sorted newest first (stable, so same-day quotes keep id order).
pub fn generate_mock_quotes<R: Rng + ?Sized>(
    count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<Quote> {
    let mut quotes: Vec<Quote> = (0..count)
        .map(|i| {
            let service_type = *ServiceType::ALL
                .choose(rng)
                .unwrap_or(&ServiceType::Inspection);
            let variance = rng.gen_range(0.8..1.2);
            let quote_amount = (service_type.base_price() * variance).floor();
            let status = *QuoteStatus::ALL
                .choose(rng)
                .unwrap_or(&QuoteStatus::Pending);

            Quote {
                id: format!("Q-{}", 1000 + i),
                customer_name: format!(
                    "{} {}",
                    FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
                    LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
                ),
                address: format!(
                    "{} {} St",
                    rng.gen_range(1..=999),
                    STREETS[rng.gen_range(0..STREETS.len())]
                ),
                service_type,
                quote_amount,
                date: today - Duration::days(rng.gen_range(0..MOCK_DAYS_BACK)),
                status,
                roof_size_sq_ft: f64::from(rng.gen_range(1500u32..3500)),
            }
        })
        .collect();

    quotes.sort_by(|a, b| b.date.cmp(&a.date));
    quotes
}

/// Seeded variant for reproducible datasets.
pub fn seeded_mock_quotes(count: usize, today: NaiveDate, seed: u64) -> Vec<Quote> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_mock_quotes(count, today, &mut rng)
}
