//! CLI commands
//!
//! Each subcommand is a thin wrapper over an `Explorer` operation.

mod search;
mod settings;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use explorer_core::{Explorer, NetworkOption};

#[derive(Parser, Debug)]
#[command(name = "explorer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stacks blockchain explorer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report what a query is, without navigating
    Classify { query: String },
    /// Navigate to a transaction id or contract reference
    Search { query: String },
    /// Navigate to a random recent transaction
    Random,
    /// List recently viewed transactions
    Recent {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show or change the selected network
    Network { network: Option<NetworkOption> },
    /// Show or toggle the color mode
    Theme {
        #[arg(long)]
        toggle: bool,
        /// System preference used when no mode is stored
        #[arg(long, env = "PREFERS_DARK")]
        prefers_dark: bool,
    },
}

pub async fn run(explorer: &Explorer, command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Classify { query } => search::classify(explorer, &query),
        Command::Search { query } => search::search(explorer, &query).await,
        Command::Random => search::random(explorer).await,
        Command::Recent { limit } => {
            search::recent(explorer, limit.unwrap_or(explorer.config().recent_limit))
        }
        Command::Network { network } => settings::network(explorer, network),
        Command::Theme {
            toggle,
            prefers_dark,
        } => settings::theme(explorer, toggle, prefers_dark),
    }
}
