use crate::routing::RouteError;
use crate::utils::toml_config::ConfigError;

// ============= Error Types =============

/// Umbrella error for everything the shell can fail at outside of rendering.
///
/// Rendering itself is infallible: contract violations in list-item state are
/// assertion failures, and unmatched or unauthorised routes resolve to a
/// navigation outcome rather than an error.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Route table error: {0}")]
    Route(#[from] RouteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("View '{0}' could not be loaded: {1}")]
    ViewLoad(String, String),
}

pub type Result<T> = std::result::Result<T, ShellError>;
