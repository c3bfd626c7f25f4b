//! Cross-reference check of tasks against the block catalog.

use serde_json::Value;

use crate::catalog::Catalog;
use crate::report::ValidationIssue;

/// Resolve every task's `blockName` and check the block's required inputs.
///
/// Meant for documents that already passed [`crate::schema::check_schema`].
/// Tasks are numbered from 1 in the issues. A task whose block is unknown
/// gets a single issue and its inputs are not looked at. Input values are
/// never inspected, so `{{task.output}}` placeholders count as present.
#[must_use]
pub fn check_references(doc: &Value, catalog: &Catalog) -> Vec<ValidationIssue> {
    let Some(tasks) = doc.get("tasks").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    for (idx, task) in tasks.iter().enumerate() {
        let number = idx + 1;
        let block_name = task.get("blockName").and_then(Value::as_str).unwrap_or_default();

        let Some(block) = catalog.get_block(block_name) else {
            issues.push(ValidationIssue::UnknownBlock {
                task: number,
                block: block_name.to_string(),
            });
            continue;
        };

        let inputs = task.get("inputs").and_then(Value::as_object);
        for input in block.required_inputs() {
            if !inputs.is_some_and(|given| given.contains_key(input)) {
                issues.push(ValidationIssue::MissingInput {
                    task: number,
                    input: input.to_string(),
                });
            }
        }
    }
    issues
}
