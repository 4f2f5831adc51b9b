//! Preference commands

use std::process::ExitCode;

use explorer_core::{Explorer, NetworkOption};

pub fn network(explorer: &Explorer, network: Option<NetworkOption>) -> anyhow::Result<ExitCode> {
    let state = match network {
        Some(network) => explorer.select_network(network)?,
        None => explorer.ui_state(),
    };

    println!(
        "{} {}",
        state.selected_network,
        state.api_server().unwrap_or("(no API server configured)")
    );

    Ok(ExitCode::SUCCESS)
}

pub fn theme(explorer: &Explorer, toggle: bool, prefers_dark: bool) -> anyhow::Result<ExitCode> {
    let mode = if toggle {
        explorer.toggle_color_mode(prefers_dark)?
    } else {
        explorer.color_mode(prefers_dark)?
    };

    println!("{mode}");

    Ok(ExitCode::SUCCESS)
}
