//! `ndocs build` command implementation.
//!
//! Renders the index and every catalog page into a directory of static HTML
//! that mirrors the server routes:
//!
//! ```text
//! site/
//! ├── index.html
//! └── assistant/
//!     └── {page_id}/index.html
//! ```

use std::path::{Path, PathBuf};

use clap::Args;
use ndocs_config::{CliSettings, Config};
use ndocs_site::Site;

use super::site_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover ndocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (fetch logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            out_dir: self.out_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let out_dir = &config.build_resolved.out_dir;

        output.info(&format!("Output: {}", out_dir.display()));

        let site = site_from_config(&config);
        let written = build_site(&site, out_dir)?;

        output.success(&format!(
            "Built {written} pages to {}",
            out_dir.display()
        ));
        Ok(())
    }
}

/// Render all pages, then write them under `out_dir`.
///
/// Nothing is written unless every page renders.
///
/// Returns the number of catalog pages written.
fn build_site(site: &Site, out_dir: &Path) -> Result<usize, CliError> {
    let index = site.render_index()?;

    let mut pages = Vec::with_capacity(site.catalog().len());
    for page_id in site.catalog() {
        validate_segment(page_id)?;
        pages.push((page_id, site.render_document(page_id)?));
    }

    std::fs::create_dir_all(out_dir)?;
    std::fs::write(out_dir.join("index.html"), index)?;

    for (page_id, html) in &pages {
        let dir = out_dir.join("assistant").join(page_id);
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join("index.html"), html)?;
        tracing::debug!(page_id = %page_id, "Wrote page");
    }

    Ok(pages.len())
}

/// Reject page IDs that cannot be used as a single path segment.
fn validate_segment(page_id: &str) -> Result<(), CliError> {
    if page_id.contains(['/', '\\']) || page_id == "." || page_id == ".." {
        return Err(CliError::Validation(format!(
            "Page ID cannot be used as a file name: {page_id}"
        )));
    }
    Ok(())
}
