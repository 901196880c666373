//! Application state.

use buster_core::analysis::gemini::GeminiClient;
use buster_core::analysis::DocumentModel;
use buster_core::config::AnalyzerConfig;
use buster_core::ui::Keymap;
use buster_core::BusterError;
use std::sync::Arc;
use tracing::{info, warn};

/// Application state shared across handlers.
///
/// Immutable after startup; requests never share mutable data.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured.
    pub analyzer: Option<Arc<dyn DocumentModel>>,
    pub keymap: Arc<Keymap>,
}

impl AppState {
    pub fn new(analyzer: Option<Arc<dyn DocumentModel>>) -> Self {
        Self {
            analyzer,
            keymap: Arc::new(Keymap::default()),
        }
    }

    /// Build state from configuration, tolerating a missing API key.
    pub fn from_config(config: &AnalyzerConfig) -> anyhow::Result<Self> {
        let analyzer: Option<Arc<dyn DocumentModel>> = match GeminiClient::from_config(config) {
            Ok(client) => {
                info!(model = client.model(), "Document model configured");
                Some(Arc::new(client))
            }
            Err(BusterError::MissingApiKey) => {
                warn!("No API key configured; /api/analyze will return 500 until one is set");
                None
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self::new(analyzer))
    }

    pub fn model_configured(&self) -> bool {
        self.analyzer.is_some()
    }
}
