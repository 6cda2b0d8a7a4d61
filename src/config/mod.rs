//! Configuration loading and filter derivation for kwatcher.
//!
//! This module handles loading the YAML configuration file,
//! splitting allow/forbid filter lists, and precompiling the
//! regex ignore patterns used by the event watcher.

mod filters;
mod types;

// Re-exports publics
pub use filters::{compile_patterns, compile_patterns_lenient, split_allow_forbid};
pub use types::{App, Config, DEFAULT_CONFIG_PATH, ENV_CONFIG_FILE, config_file_path};
