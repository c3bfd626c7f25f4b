//! Domain types and validators for agentforge configuration.
//!
//! Pure functions only: no I/O, no filesystem access.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["catalog.dir", "output.dir"];

/// Value that clears an optional setting back to its default.
pub const UNSET_VALUE: &str = "default";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.agentforge/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AgentforgeConfig {
    /// Where blocks and templates come from.
    pub catalog: CatalogConfig,
    /// Where saved agents go.
    pub output: OutputConfig,
}

/// Catalog location. `None` means the catalog built into the binary.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Output location. `None` means `~/.agentforge/agents`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// Both keys take a directory path; `default` resets the key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let reason = if value.trim().is_empty() {
        Some(format!("Expected a directory path or '{UNSET_VALUE}'"))
    } else if value.contains('\0') {
        Some("Paths must not contain NUL bytes".to_string())
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        }
        .into()),
        None => Ok(()),
    }
}

/// Apply an already-validated `key = value` to `config`.
///
/// # Errors
///
/// Returns an error if the key is not a known setting.
pub fn apply_config_value(config: &mut AgentforgeConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    let dir = (value != UNSET_VALUE).then(|| PathBuf::from(value));
    match key {
        "catalog.dir" => config.catalog.dir = dir,
        "output.dir" => config.output.dir = dir,
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
