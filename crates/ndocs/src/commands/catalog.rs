//! `ndocs catalog` command implementation.

use std::path::PathBuf;

use clap::Args;
use ndocs_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the catalog command.
#[derive(Args)]
pub(crate) struct CatalogArgs {
    /// Path to configuration file (default: auto-discover ndocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CatalogArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), Some(&CliSettings::default()))?;

        for page_id in &config.catalog.pages {
            output.data(page_id)?;
        }
        Ok(())
    }
}
