//! Insight request lifecycle.
//!
//! [`InsightCell`] is the pure state machine:
//!
//! ```text
//! Idle ──open──▶ Loading ──resolve──▶ Ready | Failed
//!                   ▲                      │
//!                   └──────refresh─────────┘
//! ```
//!
//! While `Loading`, further triggers are ignored, so at most one request is
//! in flight. A response is applied whenever it arrives, even if the time
//! range changed in the meantime; there is no cancellation.
//!
//! [`InsightPanel`] pairs a cell with a provider and performs the request
//! synchronously. See `AsyncInsightPanel` (feature `async`) for the
//! fire-and-forget variant.

use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::insights::markup;
use crate::insights::prompt::InsightSummary;
use crate::insights::provider::InsightProvider;
use crate::models::Quote;
use crate::queries::TimeRange;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "Unable to generate insights: API Key missing.";
pub const SERVICE_FAILURE_MESSAGE: &str = "Failed to retrieve AI insights at this time.";
pub const NO_INSIGHTS_MESSAGE: &str = "No insights generated.";

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsightFailure {
    /// No credential; the service was never called.
    MissingCredential,
    /// Transport error, non-success status, or an unparseable response.
    Service,
}

impl InsightFailure {
    pub fn message(&self) -> &'static str {
        match self {
            InsightFailure::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            InsightFailure::Service => SERVICE_FAILURE_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InsightReport {
    /// Sanitized list markup from the model.
    Observations { markup: String },
    /// The service answered successfully but with no text.
    Empty,
}

impl InsightReport {
    /// Text with no readable observations (blank, or an empty list) is `Empty`.
    fn from_text(text: &str) -> Self {
        let sanitized = markup::sanitize(text);
        if markup::observations(&sanitized).is_empty() {
            InsightReport::Empty
        } else {
            InsightReport::Observations { markup: sanitized }
        }
    }

    pub fn display_markup(&self) -> &str {
        match self {
            InsightReport::Observations { markup } => markup,
            InsightReport::Empty => NO_INSIGHTS_MESSAGE,
        }
    }

    /// Plain-text observations for terminal display.
    pub fn observations(&self) -> Vec<String> {
        match self {
            InsightReport::Observations { markup } => markup::observations(markup),
            InsightReport::Empty => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum InsightState {
    #[default]
    Idle,
    Loading,
    Ready(InsightReport),
    Failed(InsightFailure),
}

impl InsightState {
    pub fn is_loading(&self) -> bool {
        matches!(self, InsightState::Loading)
    }

    /// Text to show in the panel, or `None` while idle or loading.
    pub fn display_text(&self) -> Option<&str> {
        match self {
            InsightState::Idle | InsightState::Loading => None,
            InsightState::Ready(report) => Some(report.display_markup()),
            InsightState::Failed(failure) => Some(failure.message()),
        }
    }
}

// ---------------------------------------------------------------------------
// InsightRequest
// ---------------------------------------------------------------------------

/// Everything needed to perform one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightRequest {
    pub model: String,
    pub summary: InsightSummary,
    pub prompt: String,
}

impl InsightRequest {
    pub fn new(model: &str, quotes: &[Quote], range: TimeRange) -> Self {
        let summary = InsightSummary::from_quotes(quotes, range);
        let prompt = summary.to_prompt();
        Self {
            model: model.to_string(),
            summary,
            prompt,
        }
    }

    pub fn send<P: InsightProvider + ?Sized>(&self, provider: &P) -> Result<String> {
        provider.generate(&self.model, &self.prompt)
    }
}

// ---------------------------------------------------------------------------
// InsightCell
// ---------------------------------------------------------------------------

/// Tri-state result cell plus the panel-open flag.
#[derive(Debug, Clone)]
pub struct InsightCell {
    model: String,
    state: InsightState,
    open: bool,
    started: u64,
}

impl InsightCell {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            state: InsightState::Idle,
            open: false,
            started: 0,
        }
    }

    pub fn state(&self) -> &InsightState {
        &self.state
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of requests handed out so far.
    pub fn requests_started(&self) -> u64 {
        self.started
    }

    /// Open the panel. Only the first opening (state `Idle`) starts a request.
    pub fn open(
        &mut self,
        quotes: &[Quote],
        range: TimeRange,
        credential_available: bool,
    ) -> Option<InsightRequest> {
        self.open = true;
        if self.state != InsightState::Idle {
            return None;
        }
        self.begin(quotes, range, credential_available)
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Enter `Loading` and hand out a request, unless one is already pending.
    ///
    /// Without a credential the cell goes straight to `Failed` and no request
    /// is produced.
    pub fn begin(
        &mut self,
        quotes: &[Quote],
        range: TimeRange,
        credential_available: bool,
    ) -> Option<InsightRequest> {
        if self.state.is_loading() {
            tracing::debug!("Insight request already in flight; ignoring trigger");
            return None;
        }
        if !credential_available {
            tracing::warn!("Generative service API key is missing");
            self.state = InsightState::Failed(InsightFailure::MissingCredential);
            return None;
        }

        self.state = InsightState::Loading;
        self.started += 1;
        Some(InsightRequest::new(&self.model, quotes, range))
    }

    /// Apply the outcome of the pending request.
    ///
    /// Ignored unless the cell is `Loading`.
    pub fn resolve(&mut self, result: Result<String>) {
        if !self.state.is_loading() {
            tracing::warn!("Dropping insight response: no request pending");
            return;
        }

        self.state = match result {
            Ok(text) => {
                let report = InsightReport::from_text(&text);
                if report == InsightReport::Empty {
                    tracing::info!("Generative service returned no text");
                }
                InsightState::Ready(report)
            }
            Err(DashboardError::MissingCredential) => {
                InsightState::Failed(InsightFailure::MissingCredential)
            }
            Err(e) => {
                tracing::error!("Insight generation failed: {}", e);
                InsightState::Failed(InsightFailure::Service)
            }
        };
    }
}

// ---------------------------------------------------------------------------
// InsightPanel
// ---------------------------------------------------------------------------

/// Synchronous insight panel: triggers block until the provider answers.
pub struct InsightPanel<P> {
    provider: P,
    cell: InsightCell,
}

impl<P: InsightProvider> InsightPanel<P> {
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider,
            cell: InsightCell::new(model),
        }
    }

    pub fn state(&self) -> &InsightState {
        self.cell.state()
    }

    pub fn is_open(&self) -> bool {
        self.cell.is_open()
    }

    pub fn requests_started(&self) -> u64 {
        self.cell.requests_started()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Open the panel, generating insights the first time only.
    pub fn open(&mut self, quotes: &[Quote], range: TimeRange) -> &InsightState {
        let request = self
            .cell
            .open(quotes, range, self.provider.is_configured());
        if let Some(request) = request {
            self.dispatch(request);
        }
        self.cell.state()
    }

    /// Re-run the request against the current quotes.
    pub fn refresh(&mut self, quotes: &[Quote], range: TimeRange) -> &InsightState {
        let request = self
            .cell
            .begin(quotes, range, self.provider.is_configured());
        if let Some(request) = request {
            self.dispatch(request);
        }
        self.cell.state()
    }

    pub fn close(&mut self) {
        self.cell.close();
    }

    fn dispatch(&mut self, request: InsightRequest) {
        tracing::info!(
            "Requesting insights from {} for {} quotes ({})",
            request.model,
            request.summary.total_quotes,
            request.summary.range.code()
        );
        let result = request.send(&self.provider);
        self.cell.resolve(result);
    }
}
