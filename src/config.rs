use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const GENERATIVE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variables checked for the generative service key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_QUOTE_COUNT: usize = 100;
pub const RECENT_QUOTES_LIMIT: usize = 5;
pub const NOTIFICATION_LIMIT: usize = 10;

const SETTINGS_FILE: &str = "settings.json";

/// Read the first non-empty API key from [`API_KEY_VARS`].
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

pub fn default_config_dir() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("quotebot-dashboard")
    } else {
        PathBuf::from(".quotebot-dashboard")
    }
}

pub fn default_settings_path() -> PathBuf {
    default_config_dir().join(SETTINGS_FILE)
}

// ---------------------------------------------------------------------------
// Settings — business configuration shown on the settings page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub company_name: String,
    pub service_phone: String,
    pub service_areas: Vec<String>,
    /// Quotes above this amount require manual approval.
    pub approval_threshold: f64,
    pub auto_send_enabled: bool,
    /// Quotes under this amount are emailed automatically when auto-send is on.
    pub auto_send_limit: f64,
    /// Quotes at or above this amount raise a high-value notification.
    pub high_value_threshold: f64,
    pub model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            company_name: "RoofBot Solutions".to_string(),
            service_phone: "+1 (555) 123-4567".to_string(),
            service_areas: ["Austin", "Round Rock", "Cedar Park", "Pflugerville", "Georgetown"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            approval_threshold: 5_000.0,
            auto_send_enabled: false,
            auto_send_limit: 1_000.0,
            high_value_threshold: 10_000.0,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error. Fields absent from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings file at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from the platform config directory.
    pub fn load_default() -> Result<Self> {
        Self::load(&default_settings_path())
    }

    /// Whether a quote of `amount` would be emailed without review.
    pub fn auto_sends(&self, amount: f64) -> bool {
        self.auto_send_enabled && amount < self.auto_send_limit
    }

    /// Whether a quote of `amount` needs a manual approval step.
    pub fn requires_approval(&self, amount: f64) -> bool {
        amount > self.approval_threshold
    }
}
