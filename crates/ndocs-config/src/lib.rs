//! Configuration management for ndocs.
//!
//! Parses `ndocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! The Notion integration secret is never part of the file: `notion.api_key_env`
//! names the environment variable it is read from at request time.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `notion.base_url`

mod catalog;
mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use catalog::DEFAULT_PAGE_IDS;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override static build output directory.
    pub out_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ndocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Notion API configuration.
    pub notion: NotionConfig,
    /// Site presentation configuration.
    pub site: SiteConfig,
    /// Page catalog.
    pub catalog: CatalogConfig,
    /// Static build configuration (paths are relative strings from TOML).
    build: BuildConfigRaw,

    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Notion API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// API base URL.
    pub base_url: String,
    /// Value of the `Notion-Version` header.
    pub version: String,
    /// Environment variable holding the integration secret.
    pub api_key_env: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.notion.com/v1".to_owned(),
            version: "2022-06-28".to_owned(),
            api_key_env: "NOTION_API_KEY".to_owned(),
        }
    }
}

/// Site presentation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title of every page.
    pub title: String,
    /// Meta description of every page.
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: "Documentation".to_owned(),
        }
    }
}

/// Page catalog configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Notion page IDs, in listing order.
    pub pages: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            pages: catalog::default_pages(),
        }
    }
}

/// Raw build configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    out_dir: Option<String>,
}

/// Resolved static build configuration with absolute paths.
#[derive(Debug, Default)]
pub struct BuildConfig {
    /// Output directory for generated HTML.
    pub out_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`notion.base_url`").
        field: String,
        /// Error message (e.g., "${`NOTION_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `ndocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(out_dir) = &settings.out_dir {
            self.build_resolved.out_dir.clone_from(out_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            notion: NotionConfig::default(),
            site: SiteConfig::default(),
            catalog: CatalogConfig::default(),
            build: BuildConfigRaw::default(),
            build_resolved: BuildConfig {
                out_dir: base.join("site"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_notion()?;
        self.validate_catalog()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate Notion configuration.
    fn validate_notion(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.notion.base_url, "notion.base_url")?;
        require_http_url(&self.notion.base_url, "notion.base_url")?;
        require_non_empty(&self.notion.version, "notion.version")?;
        require_non_empty(&self.notion.api_key_env, "notion.api_key_env")?;
        Ok(())
    }

    /// Validate catalog entries.
    fn validate_catalog(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.catalog.pages.iter().position(String::is_empty) {
            return Err(ConfigError::Validation(format!(
                "catalog.pages[{index}] cannot be empty"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_env(&mut self.server.host, "server.host")?;
        expand::expand_env(&mut self.notion.base_url, "notion.base_url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.build_resolved = BuildConfig {
            out_dir: config_dir.join(self.build.out_dir.as_deref().unwrap_or("site")),
        };
    }
}
