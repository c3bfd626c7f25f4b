//! JSON output helpers.
//!
//! Provides the machine-readable renderer used under `--json` and the
//! error-object formatter used when a command fails.

use std::path::Path;

use agentforge_core::{
    AgentTemplate, BlockDescriptor, CatalogError, ParseError, ValidationReport,
};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

use crate::application::services::agent_service::{GeneratedAgent, SaveOutcome};
use crate::domain::agent::SavedAgent;
use crate::domain::config::AgentforgeConfig;
use crate::domain::error::{AgentError, CatalogLoadError, ConfigError, LookupError};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for the error object.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<ParseError>().is_some() {
        "parse_error"
    } else if err.downcast_ref::<LookupError>().is_some() {
        "not_found"
    } else if err.downcast_ref::<AgentError>().is_some() {
        "agent_error"
    } else if err.downcast_ref::<ConfigError>().is_some() {
        "config_error"
    } else if err.downcast_ref::<CatalogLoadError>().is_some()
        || err.downcast_ref::<CatalogError>().is_some()
    {
        "catalog_error"
    } else {
        "error"
    }
}

/// Renders command results as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &impl Serialize) -> Result<()> {
        let text = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{text}");
        Ok(())
    }

    /// `{"version": "..."}`
    pub fn render_version(&self, version: &str) -> Result<()> {
        Self::print(&json!({ "version": version }))
    }

    /// `{"source": ..., "valid": ..., "issues": [...]}`
    pub fn render_report(&self, source: &str, report: &ValidationReport) -> Result<()> {
        Self::print(&json!({
            "source": source,
            "valid": report.is_valid(),
            "issues": report.issues(),
        }))
    }

    /// The validation result, the envelope and where it was written.
    pub fn render_generated(
        &self,
        generated: &GeneratedAgent,
        saved: Option<&SaveOutcome>,
    ) -> Result<()> {
        let (saved_to, overwrite_declined) = match saved {
            Some(SaveOutcome::Saved(path)) => (Some(path.display().to_string()), false),
            Some(SaveOutcome::Declined(_)) => (None, true),
            None => (None, false),
        };
        Self::print(&json!({
            "valid": generated.report.is_valid(),
            "issues": generated.report.issues(),
            "envelope": generated.envelope,
            "saved_to": saved_to,
            "overwrite_declined": overwrite_declined,
        }))
    }

    pub fn render_blocks(&self, blocks: &[&BlockDescriptor]) -> Result<()> {
        Self::print(&blocks)
    }

    pub fn render_block(&self, block: &BlockDescriptor) -> Result<()> {
        Self::print(block)
    }

    pub fn render_blocks_summary(&self, summary: &str) -> Result<()> {
        Self::print(&json!({ "summary": summary }))
    }

    /// Template headers only; `templates show` carries the agent config.
    pub fn render_templates(&self, templates: &[&AgentTemplate]) -> Result<()> {
        let listed: Vec<_> = templates
            .iter()
            .map(|t| {
                json!({
                    "id": t.id,
                    "name": t.name,
                    "description": t.description,
                    "keywords": t.keywords,
                })
            })
            .collect();
        Self::print(&listed)
    }

    pub fn render_template(&self, template: &AgentTemplate) -> Result<()> {
        Self::print(template)
    }

    pub fn render_saved_agents(&self, dir: &Path, agents: &[SavedAgent]) -> Result<()> {
        Self::print(&json!({
            "dir": dir.display().to_string(),
            "agents": agents,
        }))
    }

    pub fn render_config(
        &self,
        config: &AgentforgeConfig,
        path: &Path,
        output_dir: &Path,
    ) -> Result<()> {
        Self::print(&json!({
            "path": path.display().to_string(),
            "config": config,
            "effective": {
                "catalog_dir": config.catalog.dir.as_ref().map(|d| d.display().to_string()),
                "output_dir": output_dir.display().to_string(),
            },
        }))
    }
}
