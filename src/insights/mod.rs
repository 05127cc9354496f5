//! AI-generated business insights.
//!
//! The flow is: condense the filtered quotes into an [`InsightSummary`]
//! (aggregates only, no customer names or addresses), render it into a
//! prompt, send one request through an [`InsightProvider`], and store the
//! outcome in the [`InsightCell`] state machine. Every failure ends as a
//! displayable [`InsightFailure`]; nothing propagates past the panel.

pub mod gemini;
pub mod markup;
pub mod orchestrator;
pub mod prompt;
pub mod provider;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use orchestrator::{
    InsightCell, InsightFailure, InsightPanel, InsightReport, InsightRequest, InsightState,
    MISSING_CREDENTIAL_MESSAGE, NO_INSIGHTS_MESSAGE, SERVICE_FAILURE_MESSAGE,
};
pub use prompt::InsightSummary;
pub use provider::InsightProvider;
