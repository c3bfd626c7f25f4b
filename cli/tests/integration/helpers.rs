//! Per-test sandbox: a temp home, a config file and an output directory.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const VALID_AGENT: &str = r#"{
  "name": "Inbox Helper",
  "description": "Summarizes research and emails it",
  "systemPrompt": "You are helpful.",
  "tasks": [
    {"id": "t1", "name": "Search", "blockName": "WebSearchBlock", "inputs": {"query": "rust"}},
    {"id": "t2", "name": "Mail", "blockName": "EmailSenderBlock",
     "inputs": {"to": "a@b.c", "subject": "News", "body": "{{t1.results}}"}}
  ]
}"#;

pub const UNKNOWN_BLOCK_AGENT: &str = r#"{
  "name": "Broken",
  "description": "Uses a block that does not exist",
  "systemPrompt": "x",
  "tasks": [{"id": "t1", "name": "Go", "blockName": "TeleportBlock", "inputs": {}}]
}"#;

pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// Fresh sandbox whose config points `output.dir` at `<tmp>/agents`.
    pub fn new() -> Self {
        let sandbox = Self {
            dir: tempfile::tempdir().expect("tempdir"),
        };
        sandbox.write_config(&format!(
            "output:\n  dir: {}\n",
            sandbox.agents_dir().display()
        ));
        sandbox
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config.yaml")
    }

    pub fn agents_dir(&self) -> PathBuf {
        self.root().join("agents")
    }

    pub fn write_config(&self, yaml: &str) {
        std::fs::write(self.config_path(), yaml).expect("write config");
    }

    /// Write `contents` under the sandbox root and return its path.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write file");
        path
    }

    pub fn saved(&self, filename: &str) -> Option<String> {
        std::fs::read_to_string(self.agents_dir().join(filename)).ok()
    }

    pub fn agentforge(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agentforge"));
        cmd.env("NO_COLOR", "1")
            .env("HOME", self.root())
            .env("AGENTFORGE_CONFIG", self.config_path())
            .env_remove("AGENTFORGE_CATALOG")
            .env_remove("AGENTFORGE_YES")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Parse a command's stdout as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
