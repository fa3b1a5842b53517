//! ndocs CLI - Notion documentation renderer.
//!
//! Provides commands for:
//! - `serve`: Start the documentation server
//! - `render`: Render one Notion page to stdout
//! - `build`: Generate static HTML for every catalog page
//! - `catalog`: List catalog page IDs

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CatalogArgs, RenderArgs, ServeArgs};
use error::CliError;
use output::Output;

/// ndocs - Notion documentation renderer.
#[derive(Parser)]
#[command(name = "ndocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// Render a single page to stdout.
    Render(RenderArgs),
    /// Build static HTML for every catalog page.
    Build(BuildArgs),
    /// List catalog page IDs.
    Catalog(CatalogArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Serve(args) => args.verbose,
            Self::Build(args) => args.verbose,
            Self::Render(_) | Self::Catalog(_) => false,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute())),
        Commands::Render(args) => args.execute(),
        Commands::Build(args) => args.execute(),
        Commands::Catalog(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
