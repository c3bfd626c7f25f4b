//! Domain logic for produced agents: pure functions, no I/O.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.

use std::path::PathBuf;

pub mod envelope;
pub mod validate;

pub use envelope::{
    AgentEnvelope, GenerationMetadata, IMPORT_SOURCE, SUGGESTED_TEMPLATE_LIMIT, extract_agent,
};
pub use validate::{
    AGENT_FILE_EXT, FILENAME_RE, default_filename, parse_override, safe_name, validate_filename,
};

/// A saved agent file as listed by `agents list`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SavedAgent {
    pub filename: String,
    pub path: PathBuf,
    /// The agent's `name`, when the file parses and has one.
    pub name: Option<String>,
    /// Template id for template-generated agents.
    pub template_id: Option<String>,
}
