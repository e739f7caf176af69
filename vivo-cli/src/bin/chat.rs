use clap::Parser;
use vivo_cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    vivo_cli::run(Cli::parse()).await
}
