use super::defaults::{DEFAULT_ANALYZE_PATH, DEFAULT_BASE_URL, DEFAULT_GREETING, ENDPOINT_ENV_VAR};
use super::error::ConfigError;
use crate::store::IdStrategy;
use std::path::Path;
use tracing::info;

/// Application configuration loaded from chat.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub analyze_path: String,
    pub timeout_secs: Option<u64>,
    pub greeting: String,
    pub ids: IdStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            analyze_path: DEFAULT_ANALYZE_PATH.to_string(),
            timeout_secs: None,
            greeting: DEFAULT_GREETING.to_string(),
            ids: IdStrategy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Apply `VIVO_ENDPOINT` from the environment, if set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        super::loader::ensure_env_loaded();
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            if !endpoint.trim().is_empty() {
                info!(endpoint = %endpoint, "Overriding endpoint from environment");
                self.set_base_url(endpoint)?;
            }
        }
        Ok(())
    }

    /// Replace the base URL after validating it.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> Result<(), ConfigError> {
        let base_url = base_url.into();
        super::loader::validate_base_url(&base_url)?;
        self.base_url = base_url;
        Ok(())
    }

    /// Full URL of the analysis endpoint.
    pub fn analyze_url(&self) -> String {
        crate::analysis::build_url(&self.base_url, &self.analyze_path)
    }
}
