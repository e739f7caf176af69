use super::AppConfig;
use super::defaults::{DEFAULT_CONFIG_PATH, DEFAULT_ENV_PATH};
use super::error::ConfigError;
use crate::store::IdStrategy;
use dotenvy::from_filename;
use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    pub base_url: Option<String>,
    pub analyze_path: Option<String>,
    pub timeout_secs: Option<u64>,
    pub greeting: Option<String>,
    pub ids: Option<IdStrategy>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(DEFAULT_ENV_PATH);
    });
}

/// Load and validate configuration.
///
/// An explicit path must exist. Without one, `config/chat.toml` is used when
/// present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)
            } else {
                debug!("No configuration file found, using defaults");
                validate_and_build(RawConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading chat configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let base_url = parsed.base_url.unwrap_or(defaults.base_url);
    validate_base_url(&base_url)?;

    let analyze_path = parsed.analyze_path.unwrap_or(defaults.analyze_path);
    if analyze_path.trim().is_empty() {
        return Err(ConfigError::EmptyAnalyzePath);
    }

    if parsed.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidTimeout);
    }

    let greeting = parsed
        .greeting
        .filter(|greeting| !greeting.trim().is_empty())
        .unwrap_or(defaults.greeting);

    Ok(AppConfig {
        base_url,
        analyze_path,
        timeout_secs: parsed.timeout_secs,
        greeting,
        ids: parsed.ids.unwrap_or_default(),
    })
}

pub(super) fn validate_base_url(value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidEndpoint {
            value: value.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
