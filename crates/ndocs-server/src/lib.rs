//! HTTP server for ndocs.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - `GET /` catalog index
//! - `GET /assistant/{page_id}` rendered Notion pages
//! - `GET /api/pages/{page_id}` rendered block tree as JSON
//! - `GET /api/catalog` catalog route parameters
//!
//! Every page route except the catalog API answers 404 when the Notion
//! credential is not set, without contacting Notion.
//!
//! # Quick Start
//!
//! ```ignore
//! use ndocs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     run_server(ServerConfig::default()).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (ndocs-server)
//!                        │
//!                        └─► handlers ──► Site (credential, fetch, render)
//!                                            │
//!                                            └─► NotionClient ──HTTPS──► Notion API
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use ndocs_notion::{NotionClient, TokenSource};
use ndocs_site::{Site, SiteConfig};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Notion API base URL.
    pub notion_base_url: String,
    /// Value of the `Notion-Version` header.
    pub notion_version: String,
    /// Environment variable holding the Notion secret.
    pub api_key_env: String,
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Catalog page IDs.
    pub catalog: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        server_config_from_config(&ndocs_config::Config::default())
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = NotionClient::new(&config.notion_base_url, &config.notion_version);

    let tokens = TokenSource::Env(config.api_key_env.clone());
    if tokens.resolve().is_none() {
        tracing::warn!(
            variable = %config.api_key_env,
            "Notion credential not set, pages will answer 404"
        );
    }

    let site = Site::new(
        Arc::new(client),
        tokens,
        SiteConfig {
            title: config.title.clone(),
            description: config.description.clone(),
            catalog: config.catalog.clone(),
        },
    );

    let state = Arc::new(AppState {
        site: Arc::new(site),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, pages = config.catalog.len(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from ndocs config.
#[must_use]
pub fn server_config_from_config(config: &ndocs_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        notion_base_url: config.notion.base_url.clone(),
        notion_version: config.notion.version.clone(),
        api_key_env: config.notion.api_key_env.clone(),
        title: config.site.title.clone(),
        description: config.site.description.clone(),
        catalog: config.catalog.pages.clone(),
    }
}
