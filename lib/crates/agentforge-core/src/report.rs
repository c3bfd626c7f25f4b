//! Validation report: schema check first, reference check second.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::catalog::Catalog;
use crate::error::ParseError;
use crate::normalize::normalize;
use crate::references::check_references;
use crate::schema::{SchemaViolation, check_schema};

/// One finding about an agent document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The document is structurally broken. Always the only issue in a report.
    Schema(SchemaViolation),
    /// Task number `task` (1-based) names a block the catalog does not have.
    UnknownBlock { task: usize, block: String },
    /// Task number `task` (1-based) lacks an input its block requires.
    MissingInput { task: usize, input: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(violation) => write!(f, "Schema validation: {violation}"),
            Self::UnknownBlock { task, block } => {
                write!(f, "Task {task}: Unknown block '{block}'")
            }
            Self::MissingInput { task, input } => {
                write!(f, "Task {task}: Missing required input '{input}'")
            }
        }
    }
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered findings for one document. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Issues rendered as the human-readable strings callers display.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("issues", &self.issues)?;
        state.end()
    }
}

/// Validate `doc` against the schema and then against `catalog`.
///
/// A schema violation short-circuits: the report then holds exactly that one
/// issue. Pure with respect to its inputs, so repeated calls agree.
#[must_use]
pub fn validate(doc: &Value, catalog: &Catalog) -> ValidationReport {
    let issues = match check_schema(doc) {
        Err(violation) => vec![ValidationIssue::Schema(violation)],
        Ok(()) => check_references(doc, catalog),
    };
    tracing::debug!(issues = issues.len(), "agent document validated");
    ValidationReport { issues }
}

impl Catalog {
    /// Same as [`validate`] with this catalog.
    #[must_use]
    pub fn validate(&self, doc: &Value) -> ValidationReport {
        validate(doc, self)
    }
}

/// Normalize raw generator output and parse it as JSON.
pub fn parse_document(raw: &str) -> Result<Value, ParseError> {
    serde_json::from_str(&normalize(raw)).map_err(ParseError::Malformed)
}

/// Parse raw text and require a fully valid agent definition.
pub fn parse_and_validate(raw: &str, catalog: &Catalog) -> Result<Value, ParseError> {
    let doc = parse_document(raw)?;
    let report = validate(&doc, catalog);
    if report.is_valid() {
        Ok(doc)
    } else {
        Err(ParseError::Invalid(report))
    }
}
