//! Query modules for the dashboard.
//!
//! Each module provides a query struct that borrows a quote slice (usually a
//! time-range-filtered view of the [`QuoteDataset`](crate::dataset::QuoteDataset))
//! and exposes pure, side-effect-free derivations. Results depend only on the
//! input slice, never on hash iteration order.

pub mod charts;
pub mod clients;
pub mod metrics;
pub mod quotes;
pub mod range;

pub use charts::ChartQuery;
pub use clients::ClientQuery;
pub use metrics::MetricsQuery;
pub use quotes::QuoteQuery;
pub use range::TimeRange;
