//! CLI command implementations
//!
//! `init` writes a default configuration file; `start` loads the
//! configuration, builds the service over a fresh store, and serves HTTP
//! until terminated.

use std::fs;
use std::path::Path;

use crate::observability::Logger;
use crate::rest_api::{ApiServerConfig, RestServer};
use crate::service::ClientService;
use crate::store::MemoryStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config, port } => start(&config, port),
    }
}

/// Load server configuration from a JSON file
pub fn load_config(path: &Path) -> CliResult<ApiServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: ApiServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    if config.host.is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }

    Ok(config)
}

/// Write a default configuration file
///
/// Refuses to overwrite an existing file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized());
    }

    let config = ApiServerConfig::default();
    let content = serde_json::to_string_pretty(&config)?;
    fs::write(config_path, content)?;

    Logger::info(
        "config_written",
        &[("path", &config_path.display().to_string())],
    );

    Ok(())
}

/// Load configuration and serve HTTP until terminated
pub fn start(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    Logger::info("config_loaded", &[("addr", &config.socket_addr())]);

    let service = ClientService::new(MemoryStore::new());
    let server = RestServer::with_config(service, config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}
