use anyhow::Context;
use clap::Parser;
use std::path::Path;

mod cli;
mod api;
mod core;
mod utils;
mod models;
mod color;
mod crypto;
mod generators;
mod tools;
mod logging;

use crate::cli::{handlers, Args, CliCommand};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(port) = args.port {
        config.web_port = port;
    }
    if let Some(address) = &args.address {
        config.web_address = address.clone();
    }

    logging::init(&config).context("Failed to initialise logging")?;
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        None | Some(CliCommand::Serve) => {
            log::info!("🦀 Starting DevTools Kit");
            api::start_server(config).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
            log::info!("✅ DevTools Kit shutdown complete.");
        }
        Some(CliCommand::Password(password_args)) => handlers::handle_password(&config, &password_args)?,
        Some(CliCommand::Strength { password }) => handlers::handle_strength(&password),
        Some(CliCommand::Color(color_args)) => handlers::handle_color(&color_args)?,
        Some(CliCommand::Hash { text, algorithm }) => handlers::handle_hash(&text, algorithm.as_deref())?,
        Some(CliCommand::Timestamp { value }) => handlers::handle_timestamp(&value)?,
        Some(CliCommand::Drive { url }) => handlers::handle_drive(&url)?,
        Some(CliCommand::Menu) => {
            // inquire blocks, keep it off the async workers
            tokio::task::spawn_blocking(move || cli::menu::run_cli_menu(&config)).await??;
        }
    }

    Ok(())
}
