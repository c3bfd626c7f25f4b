//! agentforge core: agent definitions, the block/template catalog and the
//! validation engine that checks a candidate definition against both.
//!
//! Everything here is synchronous and I/O free. Catalog loading from disk,
//! model calls and persistence belong to the caller.

pub mod agent;
pub mod catalog;
pub mod error;
pub mod normalize;
pub mod references;
pub mod report;
pub mod schema;

#[cfg(test)]
mod test_support;

pub use agent::{AgentDefinition, MemoryConfig, TaskSpec};
pub use catalog::{AgentTemplate, BlockDescriptor, Catalog, InputSpec};
pub use error::{CatalogError, ParseError};
pub use normalize::normalize;
pub use report::{ValidationIssue, ValidationReport, parse_and_validate, parse_document, validate};
pub use schema::{SchemaViolation, check_schema};
