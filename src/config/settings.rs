//! User settings for Beca
//!
//! Everything is read from the process environment at startup. Nothing is
//! validated up front: a missing API key only surfaces when an advice request
//! is attempted.

use serde::{Deserialize, Serialize};

use crate::error::{BecaError, BecaResult};
use crate::models::Money;

/// Environment variables checked, in order, for the advice service credential
pub const API_KEY_VARS: [&str; 3] = ["BECA_API_KEY", "GEMINI_API_KEY", "API_KEY"];

/// Environment variable overriding the model name
pub const MODEL_VAR: &str = "BECA_MODEL";

/// Environment variable overriding the service base URL
pub const BASE_URL_VAR: &str = "BECA_API_BASE_URL";

/// Environment variable overriding the request timeout (seconds)
pub const TIMEOUT_VAR: &str = "BECA_TIMEOUT_SECS";

/// Settings for the generative-text advice service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorSettings {
    /// Credential for the text-generation API
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL (without trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Overall grant figure quoted in the prompt
    #[serde(default = "default_reference_budget")]
    pub reference_budget: Money,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_reference_budget() -> Money {
    Money::from_cents(170_000)
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            reference_budget: default_reference_budget(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Advice service settings
    #[serde(default)]
    pub advisor: AdvisorSettings,
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> BecaResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup (useful for testing)
    pub fn from_lookup<F>(lookup: F) -> BecaResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        settings.advisor.api_key = API_KEY_VARS.iter().find_map(|key| non_empty(*key));

        if let Some(model) = non_empty(MODEL_VAR) {
            settings.advisor.model = model.trim().to_string();
        }

        if let Some(url) = non_empty(BASE_URL_VAR) {
            settings.advisor.base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = non_empty(TIMEOUT_VAR) {
            settings.advisor.timeout_secs = raw.trim().parse().map_err(|_| {
                BecaError::Config(format!("{} must be a whole number of seconds, got '{}'", TIMEOUT_VAR, raw))
            })?;
        }

        Ok(settings)
    }

    /// Whether an API key is present (it is not checked for validity)
    pub fn has_api_key(&self) -> bool {
        self.advisor.api_key.is_some()
    }
}
