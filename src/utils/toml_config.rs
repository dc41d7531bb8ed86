//! TOML-based configuration for the chat shell
//!
//! Every section and field is optional; a missing `chat-shell.toml` section
//! falls back to the defaults below.

use crate::layout::Chrome;
use crate::routing::{app_routes, Navigator, RouteGuard, ViewId};
use crate::types::ShellError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "chat-shell.toml";

/// Root configuration structure loaded from chat-shell.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Header/footer content placed around every page
    #[serde(default)]
    pub layout: Chrome,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// ============= Routing Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Where signed-out visitors of protected routes are sent
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Landing page, and where signed-in users leave the login page for
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_home_path() -> String {
    "/".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            home_path: default_home_path(),
        }
    }
}

// ============= Logging Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

// ============= Validation =============

/// Non-fatal configuration findings
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    pub message: String,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ShellConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, path) in [
            ("routing.login_path", &self.routing.login_path),
            ("routing.home_path", &self.routing.home_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be an absolute path, got '{}'",
                    name, path
                )));
            }
        }

        if self.routing.login_path == self.routing.home_path {
            return Err(ConfigError::ValidationError(
                "routing.login_path and routing.home_path must differ".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown logging.level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Validate and also collect non-fatal warnings
    pub fn validate_with_warnings(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        self.validate()?;

        let mut warnings = Vec::new();
        if self.layout.title.trim().is_empty() {
            warnings.push(ConfigWarning {
                message: "layout.title is empty; the header will render blank".to_string(),
            });
        }
        if self.layout.footer.trim().is_empty() {
            warnings.push(ConfigWarning {
                message: "layout.footer is empty; the footer will render blank".to_string(),
            });
        }
        Ok(warnings)
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(&self.routing.login_path, &self.routing.home_path)
    }

    /// Build the shell's navigator from this configuration
    pub fn navigator(&self) -> Result<Navigator<ViewId>, ShellError> {
        let table = app_routes(&self.routing.login_path, &self.routing.home_path)?;
        Ok(Navigator::new(table, self.guard())?)
    }
}
