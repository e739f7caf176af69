pub mod cli;
pub mod commands;
pub mod plain;
pub mod tui;

pub use cli::{Cli, RunMode};

use std::error::Error;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use vivo_core::{AppConfig, ChatSession, HttpAnalysisClient};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.mode == RunMode::Tui);
    info!("Starting vivo-chat");
    debug!(mode = ?cli.mode, config = ?cli.config, endpoint = ?cli.endpoint, "CLI arguments parsed");

    let config = load_config(&cli)?;
    info!(url = %config.analyze_url(), "Using analysis endpoint");

    let client = HttpAnalysisClient::from_config(&config)?;
    let session = ChatSession::from_config(client, &config);

    match cli.mode {
        RunMode::Tui => {
            tui::screens::run_chat(session, &config.analyze_url()).await?;
        }
        RunMode::Plain => {
            plain::run(session).await?;
        }
    }

    Ok(())
}

/// Resolve configuration: file, then environment, then CLI flags.
pub fn load_config(cli: &Cli) -> Result<AppConfig, Box<dyn Error>> {
    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path");
    }

    config.apply_env()?;
    if let Some(endpoint) = &cli.endpoint {
        info!(endpoint = %endpoint, "Overriding endpoint based on CLI flag");
        config.set_base_url(endpoint.clone())?;
    }
    Ok(config)
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
