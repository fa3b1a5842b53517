//! CLI error types.

use ndocs_config::ConfigError;
use ndocs_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),
}
