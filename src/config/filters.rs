//! Allow/forbid list splitting and ignore-pattern compilation.

use crate::error::ConfigError;
use regex::Regex;
use tracing::warn;

/// Splits a raw filter list into allow and forbid slices.
///
/// Entries prefixed with `!` go to the forbid slice with the marker
/// stripped; all other entries go to the allow slice unchanged. Relative
/// order within each slice follows the input order.
pub fn split_allow_forbid(entries: &[String]) -> (Vec<String>, Vec<String>) {
    let mut allow = Vec::new();
    let mut forbid = Vec::new();

    for entry in entries {
        match entry.strip_prefix('!') {
            Some(rest) => forbid.push(rest.to_string()),
            None => allow.push(entry.clone()),
        }
    }

    (allow, forbid)
}

/// Compiles a list of regex patterns, failing on the first invalid one.
///
/// # Errors
/// Returns [`ConfigError::PatternCompile`] naming the offending pattern.
/// No partially compiled list is returned on failure.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|e| ConfigError::PatternCompile {
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}

/// Compiles a list of regex patterns, skipping invalid ones.
///
/// Invalid patterns are logged at warn level and dropped, so the result
/// may be shorter than the input. Node-message patterns use this path: a
/// single bad operator-supplied pattern must not abort the whole load.
pub fn compile_patterns_lenient(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "Skipping invalid ignore pattern");
                None
            }
        })
        .collect()
}
