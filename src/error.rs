//! Centralized error types for kwatcher using thiserror.

use thiserror::Error;

/// Errors related to configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(String),
    #[error("invalid configuration: {0}")]
    Deserialize(String),
    #[error("invalid ignore pattern '{pattern}': {message}")]
    PatternCompile { pattern: String, message: String },
}
