//! The `{"agent": ..., "metadata": ...}` wrapper written for every produced agent.

use agentforge_core::AgentTemplate;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `metadata.source` for agents imported from raw generator output.
pub const IMPORT_SOURCE: &str = "import";

/// How many matching templates an import suggests.
pub const SUGGESTED_TEMPLATE_LIMIT: usize = 3;

/// An agent definition plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentEnvelope {
    pub agent: Value,
    pub metadata: GenerationMetadata,
}

/// Provenance of an [`AgentEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationMetadata {
    Template {
        generated_at: String,
        template_id: String,
        template_name: String,
    },
    Import {
        generated_at: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        suggested_templates: Vec<String>,
        source: String,
    },
}

impl AgentEnvelope {
    /// Wrap an agent imported from raw generator output.
    #[must_use]
    pub fn imported<Tz>(
        agent: Value,
        description: Option<String>,
        suggested_templates: Vec<String>,
        now: &DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            agent,
            metadata: GenerationMetadata::Import {
                generated_at: now.to_rfc3339(),
                description,
                suggested_templates,
                source: IMPORT_SOURCE.to_string(),
            },
        }
    }

    /// Wrap an agent instantiated from `template`.
    #[must_use]
    pub fn from_template<Tz>(agent: Value, template: &AgentTemplate, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            agent,
            metadata: GenerationMetadata::Template {
                generated_at: now.to_rfc3339(),
                template_id: template.id.clone(),
                template_name: template.name.clone(),
            },
        }
    }

    /// The agent's `name`, when it is a string.
    #[must_use]
    pub fn agent_name(&self) -> Option<&str> {
        self.agent.get("name").and_then(Value::as_str)
    }
}

/// The agent inside `doc`: the `agent` member of an envelope, or `doc` itself.
///
/// A document counts as an envelope when it is an object carrying both an
/// `agent` object and a `metadata` member.
#[must_use]
pub fn extract_agent(doc: &Value) -> &Value {
    match doc.get("agent") {
        Some(agent) if agent.is_object() && doc.get("metadata").is_some() => agent,
        _ => doc,
    }
}
