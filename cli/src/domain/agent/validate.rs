//! Filename and override rules for agent files: no I/O.
//!
//! All functions in this module are synchronous and take data in, returning
//! data out. Zero imports from `std::fs`, `crate::infra`, `crate::commands`,
//! or `crate::application`.

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone};
use regex::Regex;
use serde_json::Value;

use crate::domain::error::AgentError;

/// User-supplied filenames: one path component, no leading dot, so nothing
/// can escape the output directory (CWE-22).
pub static FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern and cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,127}$").expect("valid regex")
});

/// Top-level keys accepted by `--set KEY=VALUE`.
pub static OVERRIDE_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex")
});

/// Extension every saved agent file carries.
pub const AGENT_FILE_EXT: &str = ".json";

/// Stem used when an agent name has no usable characters.
pub const FALLBACK_NAME: &str = "agent";

/// Reduce an agent name to something safe inside a filename.
///
/// Keeps alphanumerics, spaces, `-` and `_`, trims, turns spaces into `_`
/// and lower-cases the result.
#[must_use]
pub fn safe_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let safe = kept.trim().replace(' ', "_").to_lowercase();
    if safe.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        safe
    }
}

/// `{safe_name}_{YYYYmmdd_HHMMSS}.json`.
#[must_use]
pub fn default_filename<Tz>(agent_name: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}_{}{AGENT_FILE_EXT}",
        safe_name(agent_name),
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Check a user-supplied filename and give it the `.json` extension.
///
/// # Errors
///
/// Returns [`AgentError::InvalidFilename`] if the name could address anything
/// other than a plain file in the output directory.
pub fn validate_filename(name: &str) -> Result<String, AgentError> {
    if !FILENAME_RE.is_match(name) {
        return Err(AgentError::InvalidFilename(name.to_string()));
    }
    if name.ends_with(AGENT_FILE_EXT) {
        Ok(name.to_string())
    } else {
        Ok(format!("{name}{AGENT_FILE_EXT}"))
    }
}

/// Parse `KEY=VALUE`. The value is read as JSON when it parses, otherwise it
/// is taken as a plain string.
///
/// # Errors
///
/// Returns [`AgentError::InvalidOverride`] if there is no `=` or the key is
/// not a plain identifier.
pub fn parse_override(raw: &str) -> Result<(String, Value), AgentError> {
    let invalid = || AgentError::InvalidOverride(raw.to_string());
    let (key, value) = raw.split_once('=').ok_or_else(invalid)?;
    let key = key.trim();
    if !OVERRIDE_KEY_RE.is_match(key) {
        return Err(invalid());
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
