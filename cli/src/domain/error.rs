//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Agent errors ──────────────────────────────────────────────────────────────

/// Errors related to producing and storing agent definitions.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Invalid filename '{0}': use letters, digits, '.', '-' or '_' (no path separators)")]
    InvalidFilename(String),

    #[error("Invalid override '{0}': expected KEY=VALUE")]
    InvalidOverride(String),

    #[error("Refusing to save an invalid agent:\n{0}")]
    InvalidAgent(String),

    #[error("Agent file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

// ── Lookup errors ─────────────────────────────────────────────────────────────

/// A name or id did not match anything in the catalog.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}

// ── Catalog load errors ───────────────────────────────────────────────────────

/// Errors related to locating a catalog on disk.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Catalog directory not found: {}", .0.display())]
    MissingDir(PathBuf),

    #[error("Catalog file not found: {}", .0.display())]
    MissingFile(PathBuf),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
