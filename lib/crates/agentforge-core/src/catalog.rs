//! Block and template catalog.
//!
//! The catalog is built once from already-deserialized records and never
//! changes afterwards, so a shared `&Catalog` can be read from any thread
//! without locking.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::CatalogError;

// ── Records ──────────────────────────────────────────────────────────────────

/// A tool an agent task can be bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Declared inputs in catalog order.
    #[serde(
        deserialize_with = "deserialize_inputs",
        serialize_with = "serialize_inputs"
    )]
    pub inputs: Vec<(String, InputSpec)>,
    pub outputs: Map<String, Value>,
    pub capabilities: Vec<String>,
}

/// Declaration of one block input.
///
/// Only `required` is interpreted; everything else (`type`, `description`,
/// defaults) is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl BlockDescriptor {
    /// Names of the inputs this block marks as required, in catalog order.
    pub fn required_inputs(&self) -> impl Iterator<Item = &str> {
        self.inputs
            .iter()
            .filter(|(_, spec)| spec.required)
            .map(|(name, _)| name.as_str())
    }

    /// Input names in catalog order.
    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|(name, _)| name.as_str())
    }
}

fn deserialize_inputs<'de, D>(deserializer: D) -> Result<Vec<(String, InputSpec)>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Map::<String, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(name, spec)| {
            serde_json::from_value(spec)
                .map(|spec| (name.clone(), spec))
                .map_err(|e| D::Error::custom(format!("input '{name}': {e}")))
        })
        .collect()
}

fn serialize_inputs<S>(inputs: &[(String, InputSpec)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(inputs.iter().map(|(name, spec)| (name, spec)))
}

/// A pre-authored agent definition used as a starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub agent_config: Map<String, Value>,
}

#[derive(Deserialize)]
struct BlocksDocument {
    blocks: Vec<BlockDescriptor>,
}

#[derive(Deserialize)]
struct TemplatesDocument {
    templates: Vec<AgentTemplate>,
}

/// Parse a `{"blocks": [...]}` document.
pub fn parse_blocks(json: &str) -> Result<Vec<BlockDescriptor>, CatalogError> {
    serde_json::from_str::<BlocksDocument>(json)
        .map(|doc| doc.blocks)
        .map_err(|source| CatalogError::Parse {
            what: "blocks",
            source,
        })
}

/// Parse a `{"templates": [...]}` document.
pub fn parse_templates(json: &str) -> Result<Vec<AgentTemplate>, CatalogError> {
    serde_json::from_str::<TemplatesDocument>(json)
        .map(|doc| doc.templates)
        .map_err(|source| CatalogError::Parse {
            what: "templates",
            source,
        })
}

// ── Store ────────────────────────────────────────────────────────────────────

/// Read-only collection of blocks and templates.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    blocks: Vec<BlockDescriptor>,
    templates: Vec<AgentTemplate>,
    /// Block name and id → index into `blocks`.
    block_keys: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting anything that would make a lookup ambiguous.
    ///
    /// A block is reachable by name and by id, so a name or id may not be
    /// reused by another block, in either role. A block whose name equals its
    /// own id is fine.
    pub fn new(
        blocks: Vec<BlockDescriptor>,
        templates: Vec<AgentTemplate>,
    ) -> Result<Self, CatalogError> {
        let mut block_keys = HashMap::with_capacity(blocks.len() * 2);
        for (idx, block) in blocks.iter().enumerate() {
            match block_keys.entry(block.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(CatalogError::DuplicateBlockName(block.name.clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
            }
            if block.id == block.name {
                continue;
            }
            match block_keys.entry(block.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(CatalogError::DuplicateBlockId(block.id.clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
            }
        }

        let mut template_ids = HashSet::with_capacity(templates.len());
        for template in &templates {
            if !template_ids.insert(template.id.as_str()) {
                return Err(CatalogError::DuplicateTemplateId(template.id.clone()));
            }
        }

        tracing::debug!(
            blocks = blocks.len(),
            templates = templates.len(),
            "catalog loaded"
        );

        Ok(Self {
            blocks,
            templates,
            block_keys,
        })
    }

    /// Build a catalog straight from the two JSON documents.
    pub fn from_json(blocks_json: &str, templates_json: &str) -> Result<Self, CatalogError> {
        Self::new(parse_blocks(blocks_json)?, parse_templates(templates_json)?)
    }

    #[must_use]
    pub fn blocks(&self) -> &[BlockDescriptor] {
        &self.blocks
    }

    #[must_use]
    pub fn templates(&self) -> &[AgentTemplate] {
        &self.templates
    }

    /// Exact, case-sensitive lookup by block name or id.
    #[must_use]
    pub fn get_block(&self, name_or_id: &str) -> Option<&BlockDescriptor> {
        self.block_keys
            .get(name_or_id)
            .and_then(|&idx| self.blocks.get(idx))
    }

    /// Exact lookup by template id.
    #[must_use]
    pub fn get_template(&self, id: &str) -> Option<&AgentTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Blocks whose capabilities or description contain any of `keywords`,
    /// case-insensitively. Catalog order is preserved.
    #[must_use]
    pub fn search_blocks<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<&BlockDescriptor> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Vec::new();
        }

        self.blocks
            .iter()
            .filter(|block| {
                let caps_match = block.capabilities.iter().any(|cap| {
                    let cap = cap.to_lowercase();
                    keywords.iter().any(|kw| cap.contains(kw.as_str()))
                });
                let description = block.description.to_lowercase();
                let desc_match = keywords.iter().any(|kw| description.contains(kw.as_str()));
                caps_match || desc_match
            })
            .collect()
    }

    /// Templates related to a free-text `query`.
    ///
    /// A template matches when one of its keywords occurs inside the query,
    /// or the query occurs inside its description or name. Case-insensitive;
    /// catalog order is preserved. An empty keyword occurs inside every query.
    #[must_use]
    pub fn search_templates(&self, query: &str) -> Vec<&AgentTemplate> {
        let query = query.to_lowercase();
        if query.trim().is_empty() {
            return Vec::new();
        }

        self.templates
            .iter()
            .filter(|template| {
                let keyword_match = template
                    .keywords
                    .iter()
                    .any(|kw| query.contains(kw.to_lowercase().as_str()));
                let desc_match = template.description.to_lowercase().contains(&query);
                let name_match = template.name.to_lowercase().contains(&query);
                keyword_match || desc_match || name_match
            })
            .collect()
    }

    /// Plain-text listing of every block, for embedding in a generation prompt.
    #[must_use]
    pub fn blocks_summary(&self) -> String {
        let mut lines = vec!["Available Tools/Blocks:\n".to_string()];
        for block in &self.blocks {
            let inputs: Vec<&str> = block.input_names().collect();
            let outputs: Vec<&str> = block.outputs.keys().map(String::as_str).collect();
            lines.push(format!("- {} ({})", block.name, block.category));
            lines.push(format!("  Description: {}", block.description));
            lines.push(format!("  Inputs: {}", inputs.join(", ")));
            lines.push(format!("  Outputs: {}", outputs.join(", ")));
            lines.push(format!(
                "  Capabilities: {}\n",
                block.capabilities.join(", ")
            ));
        }
        lines.join("\n")
    }
}
