//! Structural schema of an agent definition.
//!
//! The check walks a generic JSON document and stops at the first violation.
//! It says nothing about whether blocks exist or placeholders resolve; see
//! [`crate::references`] for that.

use serde_json::{Map, Value};
use thiserror::Error;

/// Top-level keys every agent definition must carry, in check order.
pub const REQUIRED_AGENT_KEYS: &[&str] = &["name", "description", "systemPrompt", "tasks"];

/// Keys every task entry must carry, in check order.
pub const REQUIRED_TASK_KEYS: &[&str] = &["id", "name", "blockName", "inputs"];

/// The first structural defect found in a document. Paths are rooted at `$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("{path}: missing required property '{property}'")]
    MissingProperty { path: String, property: &'static str },

    #[error("{path}: expected {expected}, found {found}")]
    WrongType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path}: must not be empty")]
    Empty { path: String },
}

/// JSON type name used in violation messages.
#[must_use]
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check `doc` against the agent definition schema.
pub fn check_schema(doc: &Value) -> Result<(), SchemaViolation> {
    let root = expect_object(doc, "$")?;
    require_keys(root, "$", REQUIRED_AGENT_KEYS)?;

    for key in ["name", "description", "systemPrompt"] {
        let path = format!("$.{key}");
        let text = expect_string(&doc[key], &path)?;
        if text.is_empty() {
            return Err(SchemaViolation::Empty { path });
        }
    }

    let tasks = expect_array(&doc["tasks"], "$.tasks")?;
    if tasks.is_empty() {
        return Err(SchemaViolation::Empty {
            path: "$.tasks".to_string(),
        });
    }
    for (idx, task) in tasks.iter().enumerate() {
        check_task(task, &format!("$.tasks[{idx}]"))?;
    }

    if let Some(memory) = root.get("memory") {
        check_memory(memory)?;
    }

    Ok(())
}

fn check_task(task: &Value, path: &str) -> Result<(), SchemaViolation> {
    require_keys(expect_object(task, path)?, path, REQUIRED_TASK_KEYS)?;
    for key in ["id", "name", "blockName"] {
        expect_string(&task[key], &format!("{path}.{key}"))?;
    }
    expect_object(&task["inputs"], &format!("{path}.inputs"))?;
    Ok(())
}

fn check_memory(memory: &Value) -> Result<(), SchemaViolation> {
    let memory = expect_object(memory, "$.memory")?;
    if let Some(enabled) = memory.get("enabled")
        && !enabled.is_boolean()
    {
        return Err(SchemaViolation::WrongType {
            path: "$.memory.enabled".to_string(),
            expected: "boolean",
            found: kind_of(enabled),
        });
    }
    if let Some(keys) = memory.get("keys") {
        let keys = expect_array(keys, "$.memory.keys")?;
        for (idx, key) in keys.iter().enumerate() {
            expect_string(key, &format!("$.memory.keys[{idx}]"))?;
        }
    }
    Ok(())
}

fn require_keys(
    object: &Map<String, Value>,
    path: &str,
    keys: &[&'static str],
) -> Result<(), SchemaViolation> {
    match keys.iter().find(|key| !object.contains_key(**key)) {
        Some(&property) => Err(SchemaViolation::MissingProperty {
            path: path.to_string(),
            property,
        }),
        None => Ok(()),
    }
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaViolation> {
    value.as_object().ok_or_else(|| wrong_type(value, path, "object"))
}

fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, SchemaViolation> {
    value.as_array().ok_or_else(|| wrong_type(value, path, "array"))
}

fn expect_string<'a>(value: &'a Value, path: &str) -> Result<&'a str, SchemaViolation> {
    value.as_str().ok_or_else(|| wrong_type(value, path, "string"))
}

fn wrong_type(value: &Value, path: &str, expected: &'static str) -> SchemaViolation {
    SchemaViolation::WrongType {
        path: path.to_string(),
        expected,
        found: kind_of(value),
    }
}
