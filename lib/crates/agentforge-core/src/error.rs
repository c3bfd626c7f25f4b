//! Hard failures of the core.
//!
//! Structural and reference findings are never errors here: they are
//! collected into a [`ValidationReport`]. Only unparseable input and a broken
//! catalog surface as `Err`.

use thiserror::Error;

use crate::report::ValidationReport;

/// The catalog source violated an integrity rule. Fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate block name '{0}' in catalog")]
    DuplicateBlockName(String),

    #[error("duplicate block id '{0}' in catalog")]
    DuplicateBlockId(String),

    #[error("duplicate template id '{0}' in catalog")]
    DuplicateTemplateId(String),

    #[error("cannot parse {what}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw text could not be turned into a usable agent document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse agent JSON")]
    Malformed(#[source] serde_json::Error),

    #[error("Agent validation failed:\n{}", .0.messages().join("\n"))]
    Invalid(ValidationReport),
}
