//! Gemini `generateContent` client.
//!
//! One blocking POST per call. The API key is sent in the `x-goog-api-key`
//! header and never logged.

use std::time::Duration;

use reqwest::blocking::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{DashboardError, Result};
use crate::insights::provider::InsightProvider;

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Option<Secret<String>>,
    /// Base URL up to and including the API version segment.
    pub base_url: String,
    /// Transport timeout for the single request.
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: config::GENERATIVE_API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl GeminiConfig {
    /// Configuration with the key read from the environment, if any.
    pub fn from_env() -> Self {
        Self {
            api_key: config::api_key_from_env().map(Secret::new),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = if key.trim().is_empty() {
            None
        } else {
            Some(Secret::new(key))
        };
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Blocking Gemini text-generation client.
///
/// Build it outside of an async runtime: the blocking reqwest client owns its
/// own runtime and must not be created or dropped on an async worker thread.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.config.base_url, model)
    }
}

impl InsightProvider for GeminiProvider {
    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let key = self
            .config
            .api_key
            .as_ref()
            .ok_or(DashboardError::MissingCredential)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!("POST {} ({} prompt bytes)", self.endpoint(model), prompt.len());
        let resp = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", key.expose_secret())
            .json(&body)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            return Err(DashboardError::Service {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        extract_text(&text)
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Concatenated text of the first candidate.
///
/// A well-formed response without candidates or text yields an empty string.
pub fn extract_text(body: &str) -> Result<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| DashboardError::MalformedResponse(e.to_string()))?;

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(text)
}

/// Pull `error.message` out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.trim().to_string())
}
