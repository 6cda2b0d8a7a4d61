// src/lib.rs
//! Kwatcher - configuration front-end for a Kubernetes event watcher.

pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use cli::LogFormat;
pub use config::{
    Config, DEFAULT_CONFIG_PATH, ENV_CONFIG_FILE, compile_patterns, compile_patterns_lenient,
    split_allow_forbid,
};
pub use error::ConfigError;
