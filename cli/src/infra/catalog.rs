//! Infrastructure implementations of the `CatalogSource` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::CatalogSource;
use crate::assets;
use crate::domain::error::CatalogLoadError;

pub const BLOCKS_FILE: &str = "blocks.json";
pub const TEMPLATES_FILE: &str = "templates.json";

/// A catalog directory holding `blocks.json` and `templates.json`.
#[derive(Debug)]
pub struct DirCatalogSource {
    dir: PathBuf,
}

impl DirCatalogSource {
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::MissingDir`] if `dir` is not a directory.
    pub fn new(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CatalogLoadError::MissingDir(dir.to_path_buf()).into());
        }
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        if !path.is_file() {
            return Err(CatalogLoadError::MissingFile(path).into());
        }
        std::fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))
    }
}

impl CatalogSource for DirCatalogSource {
    fn blocks_json(&self) -> Result<String> {
        self.read(BLOCKS_FILE)
    }

    fn templates_json(&self) -> Result<String> {
        self.read(TEMPLATES_FILE)
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// The catalog compiled into the binary.
#[derive(Debug, Default)]
pub struct EmbeddedCatalogSource;

impl CatalogSource for EmbeddedCatalogSource {
    fn blocks_json(&self) -> Result<String> {
        assets::get_asset(BLOCKS_FILE).map(str::to_string)
    }

    fn templates_json(&self) -> Result<String> {
        assets::get_asset(TEMPLATES_FILE).map(str::to_string)
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}
