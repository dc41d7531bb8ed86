//! Configuration and process setup helpers.

#[cfg(feature = "cli")]
pub mod telemetry;
pub mod toml_config;
