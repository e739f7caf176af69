//! Argument parsing and configuration resolution

use clap::Parser;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use vivo_cli::{Cli, RunMode, load_config};
use vivo_core::config::defaults::ENDPOINT_ENV_VAR;
use vivo_core::config::{AppConfig, ConfigError};

fn write_config(dir: &Path, base_url: &str) -> PathBuf {
    let path = dir.join("chat.toml");
    fs::write(&path, format!("base_url = \"{base_url}\"\n")).expect("write");
    path
}

fn set_endpoint_env(value: &str) {
    unsafe { std::env::set_var(ENDPOINT_ENV_VAR, value) };
}

fn clear_endpoint_env() {
    unsafe { std::env::remove_var(ENDPOINT_ENV_VAR) };
}

#[test]
fn defaults_to_tui_mode() {
    let cli = Cli::try_parse_from(["vivo-chat"]).expect("parse");
    assert_eq!(cli.mode, RunMode::Tui);
    assert!(cli.config.is_none());
    assert!(cli.endpoint.is_none());
}

#[test]
fn parses_plain_mode_and_overrides() {
    let cli = Cli::try_parse_from([
        "vivo-chat",
        "--mode",
        "plain",
        "--endpoint",
        "http://127.0.0.1:4000",
        "--config",
        "custom.toml",
    ])
    .expect("parse");

    assert_eq!(cli.mode, RunMode::Plain);
    assert_eq!(cli.endpoint.as_deref(), Some("http://127.0.0.1:4000"));
    assert_eq!(cli.config.as_deref(), Some("custom.toml"));
}

#[test]
fn rejects_unknown_mode() {
    assert!(Cli::try_parse_from(["vivo-chat", "--mode", "web"]).is_err());
}

#[test]
#[serial]
fn endpoint_flag_overrides_config_file() {
    clear_endpoint_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "http://from-file:3000");

    let cli = Cli::try_parse_from([
        "vivo-chat",
        "--config",
        path.to_str().expect("utf-8 path"),
        "--endpoint",
        "http://from-flag:5000",
    ])
    .expect("parse");

    let config = load_config(&cli).expect("config");
    assert_eq!(config.analyze_url(), "http://from-flag:5000/api/lab/analyze");
}

#[test]
#[serial]
fn invalid_endpoint_flag_is_rejected() {
    clear_endpoint_env();
    let cli = Cli::try_parse_from(["vivo-chat", "--endpoint", "nope"]).expect("parse");
    assert!(load_config(&cli).is_err());
}

#[test]
#[serial]
fn env_endpoint_overrides_config_file() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "http://from-file:3000");
    set_endpoint_env("http://from-env:4000");

    let mut config = AppConfig::load(Some(&path)).expect("config");
    let applied = config.apply_env();
    clear_endpoint_env();

    applied.expect("valid env endpoint");
    assert_eq!(config.base_url, "http://from-env:4000");
    assert_eq!(config.analyze_url(), "http://from-env:4000/api/lab/analyze");
}

#[test]
#[serial]
fn endpoint_flag_wins_over_env_and_file() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "http://from-file:3000");
    set_endpoint_env("http://from-env:4000");

    let cli = Cli::try_parse_from([
        "vivo-chat",
        "--config",
        path.to_str().expect("utf-8 path"),
        "--endpoint",
        "http://from-flag:5000",
    ])
    .expect("parse");
    let config = load_config(&cli);
    clear_endpoint_env();

    assert_eq!(config.expect("config").base_url, "http://from-flag:5000");
}

#[test]
#[serial]
fn env_endpoint_applies_without_flag() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "http://from-file:3000");
    set_endpoint_env("http://from-env:4000");

    let cli = Cli::try_parse_from(["vivo-chat", "--config", path.to_str().expect("utf-8 path")])
        .expect("parse");
    let config = load_config(&cli);
    clear_endpoint_env();

    assert_eq!(config.expect("config").base_url, "http://from-env:4000");
}

#[test]
#[serial]
fn blank_env_endpoint_is_ignored() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "http://from-file:3000");
    set_endpoint_env("   ");

    let mut config = AppConfig::load(Some(&path)).expect("config");
    let applied = config.apply_env();
    clear_endpoint_env();

    applied.expect("blank value is skipped");
    assert_eq!(config.base_url, "http://from-file:3000");
}

#[test]
#[serial]
fn invalid_env_endpoint_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "http://from-file:3000");
    set_endpoint_env("ftp://files.example.com");

    let mut config = AppConfig::load(Some(&path)).expect("config");
    let applied = config.apply_env();
    clear_endpoint_env();

    assert!(matches!(applied, Err(ConfigError::InvalidEndpoint { .. })));
    assert_eq!(config.base_url, "http://from-file:3000");
}
