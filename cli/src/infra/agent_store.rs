//! Infrastructure implementation of the `AgentStore` port.

use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::application::ports::AgentStore;
use crate::domain::agent::{AGENT_FILE_EXT, SavedAgent, extract_agent};
use crate::domain::config::AgentforgeConfig;
use crate::domain::error::AgentError;
use crate::infra::config::agentforge_home;

/// `~/.agentforge/agents`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_output_dir() -> Result<PathBuf> {
    Ok(agentforge_home()?.join("agents"))
}

/// Agent files in one directory on disk.
///
/// Writes go through a temp file in the same directory and are renamed into
/// place, so a reader never sees a half-written agent.
#[derive(Debug)]
pub struct FsAgentStore {
    dir: PathBuf,
}

impl FsAgentStore {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at `output.dir`, or the default directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is configured and the home directory
    /// cannot be determined.
    pub fn from_config(config: &AgentforgeConfig) -> Result<Self> {
        let dir = match &config.output.dir {
            Some(dir) => dir.clone(),
            None => default_output_dir()?,
        };
        Ok(Self::new(dir))
    }

    fn describe(path: &Path) -> SavedAgent {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut saved = SavedAgent {
            filename,
            path: path.to_path_buf(),
            name: None,
            template_id: None,
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read saved agent");
                return saved;
            }
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(doc) => {
                saved.name = extract_agent(&doc)
                    .get("name")
                    .and_then(Value::as_str)
                    .map(ToString::to_string);
                saved.template_id = doc
                    .pointer("/metadata/template_id")
                    .and_then(Value::as_str)
                    .map(ToString::to_string);
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "saved agent is not JSON"),
        }
        saved
    }
}

impl AgentStore for FsAgentStore {
    fn dir(&self) -> &Path {
        &self.dir
    }

    fn exists(&self, filename: &str) -> bool {
        self.dir.join(filename).exists()
    }

    fn write(&self, filename: &str, contents: &str, overwrite: bool) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("cannot create {}", self.dir.display()))?;
        let target = self.dir.join(filename);

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("cannot create temp file in {}", self.dir.display()))?;
        tmp.write_all(contents.as_bytes())
            .with_context(|| format!("cannot write {}", target.display()))?;

        let persisted = if overwrite {
            tmp.persist(&target)
        } else {
            tmp.persist_noclobber(&target)
        };
        match persisted {
            Ok(_) => Ok(target),
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                Err(AgentError::AlreadyExists(target).into())
            }
            Err(e) => {
                Err(anyhow::Error::new(e.error).context(format!("cannot write {}", target.display())))
            }
        }
    }

    fn list(&self) -> Result<Vec<SavedAgent>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("cannot read {}", self.dir.display()))?;

        let mut agents = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("cannot read {}", self.dir.display()))?
                .path();
            let is_agent_file = path.is_file()
                && path
                    .file_name()
                    .is_some_and(|n| n.to_string_lossy().ends_with(AGENT_FILE_EXT));
            if is_agent_file {
                agents.push(Self::describe(&path));
            }
        }
        agents.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(agents)
    }
}
