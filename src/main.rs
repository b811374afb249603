#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use copysmith::Config;
use copysmith::app::dispatch;
use copysmith::cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let config = Config::load_or_init()?;
    dispatch::dispatch(cli, config).await
}
