//! `ndocs serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use ndocs_config::{CliSettings, Config};
use ndocs_notion::ApiToken;
use ndocs_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover ndocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and fetch logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Notion API: {}", config.notion.base_url));
        output.info(&format!("Catalog: {} pages", config.catalog.pages.len()));

        if ApiToken::from_env(&config.notion.api_key_env).is_none() {
            output.warning(&format!(
                "{} is not set: pages will answer 404 until it is",
                config.notion.api_key_env
            ));
        }

        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
