//! CLI argument definitions using clap
//!
//! Commands:
//! - client-registry init --config <path>
//! - client-registry start --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// client-registry - an administrative CRUD service over client records
#[derive(Parser, Debug)]
#[command(name = "client-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./registry.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./registry.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
