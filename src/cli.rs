//! Command-line interface for kwatcher using clap.
//!
//! The configuration file path can be set with `-c`, falling back to the
//! `CONFIG_FILE` environment variable and then the default path.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format for log aggregation.
    Json,
}

/// Kubernetes event watcher configuration front-end.
#[derive(Parser, Debug)]
#[command(name = "kwatcher")]
#[command(version)]
#[command(about = "Watch Kubernetes events with configurable filters")]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short = 'c', long = "config", env = "CONFIG_FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Validate configuration and exit.
    #[arg(long = "validate")]
    pub validate: bool,

    /// Log format: text or json.
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text, env = "LOG_FORMAT")]
    pub log_format: LogFormat,
}
