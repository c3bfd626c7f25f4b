//! Application service: catalog loading and lookup use-cases.

use std::path::Path;

use agentforge_core::{AgentTemplate, BlockDescriptor, Catalog};
use anyhow::{Context, Result};

use crate::application::ports::CatalogSource;
use crate::domain::config::AgentforgeConfig;
use crate::domain::error::LookupError;

/// Read both catalog documents from `source` and build the catalog.
///
/// # Errors
///
/// Returns an error if either document cannot be read or parsed, or if the
/// catalog violates an integrity rule (duplicate names or ids).
pub fn load_catalog(source: &impl CatalogSource) -> Result<Catalog> {
    let origin = source.describe();
    let blocks = source
        .blocks_json()
        .with_context(|| format!("cannot read blocks from {origin}"))?;
    let templates = source
        .templates_json()
        .with_context(|| format!("cannot read templates from {origin}"))?;
    let catalog = Catalog::from_json(&blocks, &templates)
        .with_context(|| format!("invalid catalog in {origin}"))?;
    tracing::debug!(
        origin = %origin,
        blocks = catalog.blocks().len(),
        templates = catalog.templates().len(),
        "catalog ready"
    );
    Ok(catalog)
}

/// Catalog directory to use: the per-invocation override, then the config.
/// `None` selects the built-in catalog.
#[must_use]
pub fn catalog_dir<'a>(
    override_dir: Option<&'a Path>,
    config: &'a AgentforgeConfig,
) -> Option<&'a Path> {
    override_dir.or(config.catalog.dir.as_deref())
}

/// Look up a block by exact name or id.
///
/// # Errors
///
/// Returns [`LookupError::BlockNotFound`] when nothing matches.
pub fn find_block<'a>(catalog: &'a Catalog, name_or_id: &str) -> Result<&'a BlockDescriptor> {
    catalog
        .get_block(name_or_id)
        .ok_or_else(|| LookupError::BlockNotFound(name_or_id.to_string()).into())
}

/// Look up a template by exact id.
///
/// # Errors
///
/// Returns [`LookupError::TemplateNotFound`] when nothing matches.
pub fn find_template<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a AgentTemplate> {
    catalog
        .get_template(id)
        .ok_or_else(|| LookupError::TemplateNotFound(id.to_string()).into())
}
