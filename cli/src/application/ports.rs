//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`; never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::agent::SavedAgent;
use crate::domain::config::AgentforgeConfig;

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, or defaults when none has been saved.
    fn load(&self) -> Result<AgentforgeConfig>;
    /// Persist the configuration.
    fn save(&self, config: &AgentforgeConfig) -> Result<()>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}

/// Abstracts where the two catalog documents are read from.
pub trait CatalogSource {
    /// The `{"blocks": [...]}` document.
    fn blocks_json(&self) -> Result<String>;
    /// The `{"templates": [...]}` document.
    fn templates_json(&self) -> Result<String>;
    /// Human-readable origin, for messages.
    fn describe(&self) -> String;
}

/// Abstracts storage of produced agent files.
pub trait AgentStore {
    /// Directory files are written into.
    fn dir(&self) -> &Path;
    /// Whether `filename` is already taken.
    fn exists(&self, filename: &str) -> bool;
    /// Write `contents` as `filename`, replacing an existing file only when
    /// `overwrite` is set. Returns the final path.
    fn write(&self, filename: &str, contents: &str, overwrite: bool) -> Result<PathBuf>;
    /// Every saved agent, sorted by filename.
    fn list(&self) -> Result<Vec<SavedAgent>>;
}
