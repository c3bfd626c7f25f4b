//! Typed view of an agent definition.
//!
//! Validation runs on generic JSON; these types are for callers that want
//! field access after a document has been accepted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An executable agent plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefinition {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub tasks: Vec<TaskSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryConfig>,
}

/// One step of an agent, bound to a catalog block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    pub id: String,
    pub name: String,
    /// Block name or id.
    pub block_name: String,
    /// Literal values or `{{task_id.output_field}}` placeholders, unresolved.
    pub inputs: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub keys: Vec<String>,
}

impl AgentDefinition {
    /// Deserialize from a document. Unknown top-level keys are dropped.
    pub fn from_document(doc: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(doc)
    }

    /// Whether memory is configured and switched on.
    #[must_use]
    pub fn memory_enabled(&self) -> bool {
        self.memory.as_ref().is_some_and(|m| m.enabled)
    }
}
