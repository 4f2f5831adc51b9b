//! Stacks Explorer - command line front end

mod commands;
mod router;

use clap::Parser;
use std::process::ExitCode;

use explorer_core::{Config, Explorer};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    explorer_core::init_logging();

    let cli = commands::Cli::parse();

    let config = Config::from_env();
    tracing::debug!(database = %config.database_path.display(), "Loaded configuration");

    let explorer = Explorer::new(config)?;
    explorer.initialize()?;

    commands::run(&explorer, cli.command).await
}
