//! Fire-and-forget insight panel for async front ends (Tokio).
//!
//! The provider call runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], so the event loop keeps handling input
//! while the request is pending. The shared [`InsightCell`] guards against
//! duplicate requests: reopening the panel or pressing refresh while a
//! request is in flight does nothing.
//!
//! # Example
//!
//! ```no_run
//! use quotebot_dashboard::{AsyncInsightPanel, TimeRange};
//! use quotebot_dashboard::insights::{GeminiConfig, GeminiProvider};
//!
//! let provider = GeminiProvider::new(GeminiConfig::from_env()).unwrap();
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! rt.block_on(async {
//!     let panel = AsyncInsightPanel::new(provider, "gemini-2.5-flash");
//!     panel.open(&[], TimeRange::Last30Days);
//!     panel.wait_idle().await.unwrap();
//!     println!("{:?}", panel.state());
//! });
//! ```

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::error::{DashboardError, Result};
use crate::insights::{InsightCell, InsightProvider, InsightRequest, InsightState};
use crate::models::Quote;
use crate::queries::TimeRange;

/// Insight panel whose requests run in the background.
///
/// `open` and `refresh` must be called from within a Tokio runtime.
pub struct AsyncInsightPanel<P> {
    provider: Arc<P>,
    cell: Arc<Mutex<InsightCell>>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl<P: InsightProvider + 'static> AsyncInsightPanel<P> {
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider: Arc::new(provider),
            cell: Arc::new(Mutex::new(InsightCell::new(model))),
            in_flight: Mutex::new(None),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> InsightState {
        self.lock_cell().state().clone()
    }

    pub fn is_open(&self) -> bool {
        self.lock_cell().is_open()
    }

    pub fn requests_started(&self) -> u64 {
        self.lock_cell().requests_started()
    }

    /// Open the panel. Returns `true` if this started a request.
    pub fn open(&self, quotes: &[Quote], range: TimeRange) -> bool {
        let configured = self.provider.is_configured();
        let request = self.lock_cell().open(quotes, range, configured);
        self.spawn(request)
    }

    /// Re-run the request. Returns `false` if one is already in flight.
    pub fn refresh(&self, quotes: &[Quote], range: TimeRange) -> bool {
        let configured = self.provider.is_configured();
        let request = self.lock_cell().begin(quotes, range, configured);
        self.spawn(request)
    }

    /// Hide the panel. A pending request keeps running and still lands.
    pub fn close(&self) {
        self.lock_cell().close();
    }

    /// Wait for the in-flight request, if any, to be applied.
    pub async fn wait_idle(&self) -> Result<()> {
        let handle = self
            .in_flight
            .lock()
            .map_err(|_| DashboardError::InvalidArgument("panel lock poisoned".into()))?
            .take();
        if let Some(handle) = handle {
            handle
                .await
                .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?;
        }
        Ok(())
    }

    fn spawn(&self, request: Option<InsightRequest>) -> bool {
        let Some(request) = request else {
            return false;
        };

        let provider = Arc::clone(&self.provider);
        let cell = Arc::clone(&self.cell);
        tracing::info!(
            "Requesting insights from {} for {} quotes ({})",
            request.model,
            request.summary.total_quotes,
            request.summary.range.code()
        );
        let handle = tokio::task::spawn_blocking(move || {
            let result = request.send(provider.as_ref());
            let mut guard = cell.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            guard.resolve(result);
        });

        let mut slot = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(handle);
        true
    }

    fn lock_cell(&self) -> std::sync::MutexGuard<'_, InsightCell> {
        self.cell
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
