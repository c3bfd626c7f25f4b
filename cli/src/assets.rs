//! Embedded assets: the built-in block and template catalog.
//!
//! At compile time, `include_dir!` embeds everything under `assets/catalog/`:
//!   - `blocks.json`: `{"blocks": [...]}`
//!   - `templates.json`: `{"templates": [...]}`

use anyhow::{Context, Result};
use include_dir::{Dir, include_dir};

static EMBEDDED_CATALOG: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/catalog");

/// Return the text of a single embedded catalog file.
///
/// # Errors
///
/// Returns an error if no file with the given `name` exists or it is not UTF-8.
pub fn get_asset(name: &str) -> Result<&'static str> {
    EMBEDDED_CATALOG
        .get_file(name)
        .ok_or_else(|| anyhow::anyhow!("embedded asset not found: {name}"))?
        .contents_utf8()
        .with_context(|| format!("embedded asset {name} is not UTF-8"))
}
