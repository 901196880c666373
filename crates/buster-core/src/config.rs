//! Analyzer configuration loaded from the environment.

use tracing::warn;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "GEMINI_MODEL";
pub const API_BASE_ENV: &str = "GEMINI_API_BASE";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Settings for the external multimodal model.
///
/// A missing API key is a valid configuration: the server still starts and
/// reports the problem on each analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let config = Self {
            api_key: non_empty(API_KEY_ENV),
            model: non_empty(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty(API_BASE_ENV)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        };

        if config.api_key.is_none() {
            warn!("{} is not set; analysis requests will be rejected", API_KEY_ENV);
        }

        config
    }

    /// Override the API key (e.g. from a CLI flag).
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
