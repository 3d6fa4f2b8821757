// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute (starts the API server when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server port
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// API server bind address
    #[arg(long, global = true)]
    pub address: Option<String>,
}
