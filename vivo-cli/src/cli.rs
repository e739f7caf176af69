use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "vivo-chat",
    version,
    about = "Ask the Vivo Health assistant about your lab results from the terminal"
)]
pub struct Cli {
    /// Path to chat.toml (defaults to config/chat.toml when present)
    #[arg(long)]
    pub config: Option<String>,
    /// Base URL of the analysis service, overrides config and VIVO_ENDPOINT
    #[arg(long)]
    pub endpoint: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Full-screen chat
    Tui,
    /// Line-oriented chat over stdin/stdout
    Plain,
}
