//! Quote analytics for a roofing-services dashboard.
//!
//! Holds an immutable snapshot of quotes, narrows it to a trailing time
//! window, and derives everything the dashboard pages show: stat card
//! metrics, daily revenue and volume series, the service mix, and a client
//! roster. An insight panel condenses the filtered quotes into aggregate
//! statistics and asks a generative-language service for three short
//! business observations.
//!
//! # Quick start
//!
//! ```no_run
//! use quotebot_dashboard::{Dashboard, TimeRange, View};
//!
//! let mut dashboard = Dashboard::builder().mock_seed(7).build().unwrap();
//!
//! dashboard.set_time_range(TimeRange::Last7Days);
//! let metrics = dashboard.metrics();
//! println!("{} quotes, ${:.0}", metrics.total_quotes, metrics.total_revenue);
//!
//! dashboard.navigate(View::Clients);
//! let page = dashboard.page();
//!
//! // Generates on first open only; refresh re-runs the request.
//! let state = dashboard.open_insights();
//! println!("{:?}", state.display_text());
//! ```

#[cfg(feature = "async")]
pub mod async_panel;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod insights;
pub mod mock;
pub mod models;
pub mod notifications;
pub mod queries;
pub mod view;

#[cfg(feature = "async")]
pub use async_panel::AsyncInsightPanel;
pub use config::Settings;
pub use dataset::QuoteDataset;
pub use error::{DashboardError, Result};
pub use insights::{InsightPanel, InsightProvider, InsightState};
pub use queries::TimeRange;
pub use view::{Page, View};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;

use insights::{GeminiConfig, GeminiProvider};
use models::{ClientSummary, DashboardMetrics, Quote};
use queries::{ChartQuery, ClientQuery, MetricsQuery, QuoteQuery};

// ---------------------------------------------------------------------------
// DashboardBuilder
// ---------------------------------------------------------------------------

enum DatasetSource {
    Mock { count: usize, seed: Option<u64> },
    File(PathBuf),
    Quotes(Vec<Quote>),
}

/// Builder for configuring and constructing a [`Dashboard`].
///
/// Use [`Dashboard::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DashboardBuilder::build).
pub struct DashboardBuilder {
    source: DatasetSource,
    settings: Option<Settings>,
    settings_path: Option<PathBuf>,
    reference_date: Option<NaiveDate>,
    range: TimeRange,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
    provider: Option<Box<dyn InsightProvider>>,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self {
            source: DatasetSource::Mock {
                count: config::DEFAULT_QUOTE_COUNT,
                seed: None,
            },
            settings: None,
            settings_path: None,
            reference_date: None,
            range: TimeRange::default(),
            api_key: None,
            model: None,
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
            provider: None,
        }
    }
}

impl DashboardBuilder {
    /// Generate `count` mock quotes (the default source, 100 quotes).
    pub fn mock_count(mut self, count: usize) -> Self {
        let seed = match self.source {
            DatasetSource::Mock { seed, .. } => seed,
            _ => None,
        };
        self.source = DatasetSource::Mock { count, seed };
        self
    }

    /// Make the mock dataset reproducible.
    pub fn mock_seed(mut self, seed: u64) -> Self {
        let count = match self.source {
            DatasetSource::Mock { count, .. } => count,
            _ => config::DEFAULT_QUOTE_COUNT,
        };
        self.source = DatasetSource::Mock {
            count,
            seed: Some(seed),
        };
        self
    }

    /// Load quotes from a JSON (or `.json.gz`) file instead of generating them.
    pub fn data_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = DatasetSource::File(path.as_ref().to_path_buf());
        self
    }

    /// Use an explicit quote collection.
    pub fn quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.source = DatasetSource::Quotes(quotes);
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Read settings from this file instead of the platform config directory.
    pub fn settings_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.settings_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Pin "today". Defaults to the local calendar date at each call.
    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn time_range(mut self, range: TimeRange) -> Self {
        self.range = range;
        self
    }

    /// Generative service key. Defaults to `GEMINI_API_KEY` / `API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Model identifier. Defaults to the one in [`Settings`].
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Transport timeout for the insight request. Defaults to 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the Gemini client with another provider.
    pub fn provider<P: InsightProvider + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the dashboard: load settings, create the quote snapshot, and
    /// set up the insight provider. No network request is made here.
    pub fn build(self) -> Result<Dashboard> {
        let settings = match (self.settings, &self.settings_path) {
            (Some(settings), _) => settings,
            (None, Some(path)) => Settings::load(path)?,
            (None, None) => Settings::load_default()?,
        };

        let today = self
            .reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let dataset = match self.source {
            DatasetSource::Mock { count, seed } => {
                let quotes = match seed {
                    Some(seed) => mock::seeded_mock_quotes(count, today, seed),
                    None => mock::generate_mock_quotes(count, today, &mut rand::thread_rng()),
                };
                QuoteDataset::new(quotes)?
            }
            DatasetSource::File(path) => QuoteDataset::from_json_file(&path)?,
            DatasetSource::Quotes(quotes) => QuoteDataset::new(quotes)?,
        };

        let provider: Box<dyn InsightProvider> = match self.provider {
            Some(provider) => provider,
            None => {
                let mut cfg = GeminiConfig::from_env().with_timeout(self.timeout);
                if let Some(key) = self.api_key {
                    cfg = cfg.with_api_key(key);
                }
                if let Some(url) = self.base_url {
                    cfg = cfg.with_base_url(url);
                }
                Box::new(GeminiProvider::new(cfg)?)
            }
        };
        let model = self.model.unwrap_or_else(|| settings.model.clone());

        Ok(Dashboard {
            dataset,
            settings,
            reference_date: self.reference_date,
            view: View::default(),
            range: self.range,
            insights: InsightPanel::new(provider, model),
        })
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Top-level controller owning the snapshot and all UI selection state.
///
/// The only mutations are navigation, the time range, and the insight
/// panel actions; everything else is a read-only derived view recomputed
/// from the snapshot on each call.
pub struct Dashboard {
    dataset: QuoteDataset,
    settings: Settings,
    reference_date: Option<NaiveDate>,
    view: View,
    range: TimeRange,
    insights: InsightPanel<Box<dyn InsightProvider>>,
}

impl Dashboard {
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    // -- Selection state ---------------------------------------------------

    pub fn view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) {
        tracing::debug!("Navigating to {}", view.name());
        self.view = view;
    }

    pub fn time_range(&self) -> TimeRange {
        self.range
    }

    pub fn set_time_range(&mut self, range: TimeRange) {
        self.range = range;
    }

    /// The pinned reference date, or the local date right now.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    // -- Data --------------------------------------------------------------

    /// The full, unfiltered snapshot.
    pub fn dataset(&self) -> &QuoteDataset {
        &self.dataset
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Quotes inside the selected time range, in snapshot order.
    pub fn filtered_quotes(&self) -> Vec<Quote> {
        self.range.filter(&self.dataset, self.today())
    }

    pub fn metrics(&self) -> DashboardMetrics {
        MetricsQuery::new(&self.filtered_quotes()).compute()
    }

    /// Client roster over the full snapshot; ignores the time range.
    pub fn clients(&self) -> Vec<ClientSummary> {
        ClientQuery::new(&self.dataset).roster()
    }

    pub fn search_quotes(&self, term: &str) -> Vec<Quote> {
        QuoteQuery::new(&self.filtered_quotes()).search(term)
    }

    /// Derived data for the current view.
    pub fn page(&self) -> Page {
        let today = self.today();
        match self.view {
            View::Dashboard => {
                let quotes = self.filtered_quotes();
                let charts = ChartQuery::new(&quotes);
                Page::Dashboard {
                    metrics: MetricsQuery::new(&quotes).compute(),
                    revenue_trend: charts.revenue_by_day(),
                    service_distribution: charts.count_by_service(),
                    recent_quotes: QuoteQuery::new(&quotes).recent(config::RECENT_QUOTES_LIMIT),
                    volume: charts.count_by_day(),
                }
            }
            View::Quotes => Page::Quotes {
                quotes: self.filtered_quotes(),
            },
            View::Clients => {
                let clients = self.clients();
                Page::Clients {
                    stats: queries::clients::roster_stats(&clients, today),
                    clients,
                }
            }
            View::Analytics => {
                let quotes = self.filtered_quotes();
                let charts = ChartQuery::new(&quotes);
                Page::Analytics {
                    revenue_trend: charts.revenue_by_day(),
                    service_distribution: charts.count_by_service(),
                    volume: charts.count_by_day(),
                }
            }
            View::Settings => Page::Settings {
                settings: self.settings.clone(),
            },
            View::Notifications => Page::Notifications {
                notifications: notifications::derive(
                    &self.dataset,
                    &self.settings,
                    config::NOTIFICATION_LIMIT,
                ),
            },
        }
    }

    // -- Insight panel -----------------------------------------------------

    pub fn insight_state(&self) -> &InsightState {
        self.insights.state()
    }

    pub fn insights_open(&self) -> bool {
        self.insights.is_open()
    }

    /// Open the insight panel; generates from the filtered quotes on the
    /// first opening only.
    pub fn open_insights(&mut self) -> &InsightState {
        let quotes = self.filtered_quotes();
        self.insights.open(&quotes, self.range)
    }

    pub fn refresh_insights(&mut self) -> &InsightState {
        let quotes = self.filtered_quotes();
        self.insights.refresh(&quotes, self.range)
    }

    pub fn close_insights(&mut self) {
        self.insights.close();
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dashboard(quotes={}, view={}, range={}, today={})",
            self.dataset.len(),
            self.view.name(),
            self.range.code(),
            self.today()
        )
    }
}
