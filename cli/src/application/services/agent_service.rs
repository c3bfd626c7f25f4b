//! Application service: validate, import, instantiate and save agents.
//!
//! Imports only from `crate::domain`, `crate::application::ports` and the
//! core crate. All I/O is routed through injected port traits; the current
//! time is passed in so results are reproducible.

use std::path::{Path, PathBuf};

use agentforge_core::{AgentDefinition, Catalog, ValidationReport, parse_document};
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use serde_json::Value;

use crate::application::ports::AgentStore;
use crate::application::services::catalog_service::find_template;
use crate::domain::agent::{
    AgentEnvelope, SUGGESTED_TEMPLATE_LIMIT, SavedAgent, default_filename, extract_agent,
    validate_filename,
};
use crate::domain::error::AgentError;

/// An agent wrapped with its metadata, plus its validation result.
#[derive(Debug, Clone)]
pub struct GeneratedAgent {
    pub envelope: AgentEnvelope,
    pub report: ValidationReport,
}

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The target existed and overwriting was declined.
    Declined(PathBuf),
}

/// Validate raw text holding a bare agent document or an envelope.
///
/// # Errors
///
/// Returns an error only when the text is not JSON after normalization.
/// Findings are carried in the report.
pub fn validate_text(raw: &str, catalog: &Catalog) -> Result<ValidationReport> {
    let doc = parse_document(raw)?;
    Ok(catalog.validate(extract_agent(&doc)))
}

/// Ids of the first templates related to `description`.
#[must_use]
pub fn suggest_templates(catalog: &Catalog, description: &str) -> Vec<String> {
    catalog
        .search_templates(description)
        .into_iter()
        .take(SUGGESTED_TEMPLATE_LIMIT)
        .map(|t| t.id.clone())
        .collect()
}

/// Turn a raw generator response into an enveloped agent.
///
/// # Errors
///
/// Returns an error when the response is not JSON after normalization.
pub fn import_response<Tz>(
    raw: &str,
    description: Option<&str>,
    catalog: &Catalog,
    now: &DateTime<Tz>,
) -> Result<GeneratedAgent>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let doc = parse_document(raw)?;
    let agent = extract_agent(&doc).clone();
    let report = catalog.validate(&agent);
    let suggested = description
        .map(|d| suggest_templates(catalog, d))
        .unwrap_or_default();
    tracing::debug!(
        valid = report.is_valid(),
        suggestions = suggested.len(),
        "response imported"
    );
    Ok(GeneratedAgent {
        envelope: AgentEnvelope::imported(
            agent,
            description.map(ToString::to_string),
            suggested,
            now,
        ),
        report,
    })
}

/// Copy a template's agent configuration and apply top-level overrides.
///
/// # Errors
///
/// Returns [`crate::domain::error::LookupError::TemplateNotFound`] for an
/// unknown id.
pub fn generate_from_template<Tz>(
    catalog: &Catalog,
    template_id: &str,
    overrides: &[(String, Value)],
    now: &DateTime<Tz>,
) -> Result<GeneratedAgent>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let template = find_template(catalog, template_id)?;
    let mut config = template.agent_config.clone();
    for (key, value) in overrides {
        config.insert(key.clone(), value.clone());
    }
    let agent = Value::Object(config);
    let report = catalog.validate(&agent);
    if !report.is_valid() {
        tracing::warn!(template = template_id, "instantiated template does not validate");
    }
    Ok(GeneratedAgent {
        envelope: AgentEnvelope::from_template(agent, template, now),
        report,
    })
}

/// Save a valid agent as pretty JSON.
///
/// Without `filename` the name is derived from the agent name and `now`.
/// When the target exists, `confirm_overwrite` decides whether to replace it.
///
/// # Errors
///
/// Returns an error if the agent has validation issues, the filename is
/// unsafe, the confirmation fails, or the store cannot write.
pub fn save_agent<Tz>(
    store: &impl AgentStore,
    generated: &GeneratedAgent,
    filename: Option<&str>,
    now: &DateTime<Tz>,
    confirm_overwrite: impl FnOnce(&Path) -> Result<bool>,
) -> Result<SaveOutcome>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if !generated.report.is_valid() {
        return Err(AgentError::InvalidAgent(generated.report.messages().join("\n")).into());
    }
    let definition = AgentDefinition::from_document(&generated.envelope.agent)
        .context("validated agent does not fit the agent model")?;
    let filename = match filename {
        Some(name) => validate_filename(name)?,
        None => default_filename(&definition.name, now),
    };

    let overwrite = store.exists(&filename);
    if overwrite {
        let target = store.dir().join(&filename);
        if !confirm_overwrite(&target)? {
            tracing::debug!(path = %target.display(), "overwrite declined");
            return Ok(SaveOutcome::Declined(target));
        }
    }

    let mut contents =
        serde_json::to_string_pretty(&generated.envelope).context("cannot serialize agent")?;
    contents.push('\n');
    let path = store.write(&filename, &contents, overwrite)?;
    tracing::info!(
        path = %path.display(),
        tasks = definition.tasks.len(),
        memory = definition.memory_enabled(),
        "agent saved"
    );
    Ok(SaveOutcome::Saved(path))
}

/// Every saved agent in the store.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_agents(store: &impl AgentStore) -> Result<Vec<SavedAgent>> {
    store.list()
}
