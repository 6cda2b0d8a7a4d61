//! Core configuration types and loading.

use super::filters::{compile_patterns, compile_patterns_lenient, split_allow_forbid};
use crate::error::ConfigError;
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variable name overriding the configuration file path.
pub const ENV_CONFIG_FILE: &str = "CONFIG_FILE";

/// Resolves the configuration file path from the environment.
///
/// Uses [`ENV_CONFIG_FILE`] when set, else [`DEFAULT_CONFIG_PATH`]. This is
/// the only place the process environment is consulted; tests load from an
/// explicit path via [`Config::load_from`] instead of mutating it.
pub fn config_file_path() -> PathBuf {
    std::env::var(ENV_CONFIG_FILE)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Main configuration structure for kwatcher.
///
/// Unknown YAML keys are ignored; missing keys take zero values. The
/// derived fields are populated once during load and never mutated after.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Maximum number of recent log lines attached to an event report.
    pub max_recent_log_lines: i64,
    /// Namespace filter list; `!` prefix forbids a namespace.
    pub namespaces: Vec<String>,
    /// Event reason filter list; `!` prefix forbids a reason.
    pub reasons: Vec<String>,
    /// Pod name patterns to ignore (consumed raw, not compiled here).
    pub ignore_pod_names: Vec<String>,
    /// Regex patterns suppressing matching container log lines.
    pub ignore_log_patterns: Vec<String>,
    /// Node condition reasons to ignore, compared verbatim by the watcher.
    pub ignore_node_reasons: Vec<String>,
    /// Regex patterns suppressing matching node condition messages.
    pub ignore_node_messages: Vec<String>,
    /// Descriptive settings for the running instance.
    pub app: App,

    /// Namespaces allowed by the filter list (derived, not deserialized).
    #[serde(skip)]
    pub allowed_namespaces: Vec<String>,
    /// Namespaces forbidden by the filter list (derived).
    #[serde(skip)]
    pub forbidden_namespaces: Vec<String>,
    /// Event reasons allowed by the filter list (derived).
    #[serde(skip)]
    pub allowed_reasons: Vec<String>,
    /// Event reasons forbidden by the filter list (derived).
    #[serde(skip)]
    pub forbidden_reasons: Vec<String>,
    /// Compiled log-line ignore patterns (derived).
    #[serde(skip)]
    pub ignore_log_patterns_compiled: Vec<Regex>,
    /// Compiled node-message ignore patterns (derived; invalid entries
    /// are dropped, so this may be shorter than the raw list).
    #[serde(skip)]
    pub ignore_node_messages_compiled: Vec<Regex>,
}

/// Descriptive application settings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct App {
    /// Proxy URL used for outbound requests.
    #[serde(rename = "proxyURL")]
    pub proxy_url: String,
    /// Cluster name shown in event reports.
    pub cluster_name: String,
}

impl Config {
    /// Load configuration from the path named by `CONFIG_FILE`, else
    /// from the default `config.yaml`.
    ///
    /// # Errors
    /// Returns [`ConfigError::FileRead`] if the file cannot be read.
    /// Returns [`ConfigError::Deserialize`] if the YAML is invalid.
    /// Returns [`ConfigError::PatternCompile`] if a log ignore pattern
    /// is not a valid regex.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from an explicit file path.
    ///
    /// An empty (or `null`) document is valid and yields the zero-valued
    /// configuration. On any error no partial configuration is returned.
    ///
    /// # Errors
    /// Same as [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(format!("{}: {}", path.display(), e)))?;

        let mut config: Config = serde_yaml::from_str::<Option<Config>>(&content)
            .map_err(|e| ConfigError::Deserialize(e.to_string()))?
            .unwrap_or_default();

        (config.allowed_namespaces, config.forbidden_namespaces) =
            split_allow_forbid(&config.namespaces);
        (config.allowed_reasons, config.forbidden_reasons) = split_allow_forbid(&config.reasons);

        // Log patterns are strict: one bad regex aborts the load. Node
        // messages are lenient: bad entries are dropped with a warning.
        config.ignore_log_patterns_compiled = compile_patterns(&config.ignore_log_patterns)?;
        config.ignore_node_messages_compiled =
            compile_patterns_lenient(&config.ignore_node_messages);

        Ok(config)
    }
}
