//! Command implementations

pub mod agents;
pub mod blocks;
pub mod config;
pub mod import;
pub mod new;
pub mod templates;
pub mod validate;
pub mod version;

use std::io::Read as _;

use anyhow::{Context, Result};

/// Argument value that means "read standard input".
pub const STDIN_ARG: &str = "-";

/// Read a document from a path, or from stdin for `-`.
///
/// Returns a display label for the source together with its text.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: &str) -> Result<(String, String)> {
    if path == STDIN_ARG {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("cannot read standard input")?;
        return Ok(("<stdin>".to_string(), text));
    }
    let text = std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
    Ok((path.to_string(), text))
}
