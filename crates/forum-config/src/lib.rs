//! Configuration management for the forum board.
//!
//! Parses `forum.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `server.base_url` supports `${VAR}` and `${VAR:-default}` references.
//!
//! ## Example
//!
//! ```toml
//! [server]
//! base_url = "${FORUM_URL:-http://localhost:8080}"
//! timeout_secs = 10
//!
//! [page]
//! path = "/cyber.html"
//!
//! [display]
//! date_format = "%d/%m/%Y %H:%M"
//!
//! [display.labels]
//! no_posts = "Nothing here yet."
//! ```

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server base URL.
    pub base_url: Option<String>,
    /// Override request timeout.
    pub timeout_secs: Option<u64>,
    /// Override page path.
    pub path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "forum.toml";

/// Longest accepted request timeout.
const MAX_TIMEOUT_SECS: u64 = 600;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Forum server configuration.
    pub server: ServerConfig,
    /// Page configuration.
    pub page: PageConfig,
    /// Display configuration.
    pub display: DisplayConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Forum server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL the API routes are appended to.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_owned(),
            timeout_secs: 30,
        }
    }
}

/// Page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page path the category is resolved from.
    pub path: String,
    /// Id of the element the posts are rendered into.
    pub container_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            path: "/".to_owned(),
            container_id: "posts-container".to_owned(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime format for post and comment dates.
    pub date_format: String,
    /// Overrides of user-visible strings.
    pub labels: LabelsConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: forum_renderer::DEFAULT_DATE_FORMAT.to_owned(),
            labels: LabelsConfig::default(),
        }
    }
}

/// Overrides of user-visible strings. Unset entries keep the built-in text.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Prefix of the post author line.
    pub posted_by: Option<String>,
    /// Placeholder when a category has no posts.
    pub no_posts: Option<String>,
    /// Placeholder when a post has no comments.
    pub no_comments: Option<String>,
    /// Word introducing a comment's author.
    pub comment_by: Option<String>,
    /// Placeholder of the email field.
    pub email_placeholder: Option<String>,
    /// Placeholder of the comment field.
    pub comment_placeholder: Option<String>,
    /// Submit button text.
    pub submit: Option<String>,
    /// Notice shown when posts cannot be loaded.
    pub posts_load_error: Option<String>,
    /// Notice shown when a comment thread cannot be loaded.
    pub comments_load_error: Option<String>,
    /// Alert shown when a comment submission fails.
    pub submit_error: Option<String>,
    /// Alert shown when a comment form is incomplete.
    pub invalid_form: Option<String>,
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
        /// Config field path (e.g., "`server.base_url`").
        field: String,
        /// Error message (e.g., "${`FORUM_URL`} not set").
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
    /// Otherwise, searches for `forum.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
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
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.server.base_url.clone_from(base_url);
        }
        if let Some(timeout_secs) = settings.timeout_secs {
            self.server.timeout_secs = timeout_secs;
        }
        if let Some(path) = &settings.path {
            self.page.path.clone_from(path);
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_page()?;
        self.validate_display()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.base_url, "server.base_url")?;
        require_http_url(&self.server.base_url, "server.base_url")?;

        if self.server.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "server.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        if self.server.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "server.timeout_secs cannot exceed {MAX_TIMEOUT_SECS}"
            )));
        }

        Ok(())
    }

    fn validate_page(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.page.container_id, "page.container_id")?;
        if self.page.container_id.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "page.container_id cannot contain whitespace".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_display(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.display.date_format, "display.date_format")?;
        if !forum_renderer::is_valid_date_format(&self.display.date_format) {
            return Err(ConfigError::Validation(format!(
                "display.date_format is not a usable date format: {}",
                self.display.date_format
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.base_url = expand::expand_env(&self.server.base_url, "server.base_url")?;
        Ok(())
    }
}
