//! Output formatting module

pub mod human;
pub mod json;
pub mod styles;

use std::path::Path;

use agentforge_core::{AgentTemplate, BlockDescriptor, ValidationReport};
use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::application::services::agent_service::{GeneratedAgent, SaveOutcome};
use crate::domain::agent::SavedAgent;
use crate::domain::config::AgentforgeConfig;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print a validation issue prefixed with `✗` to stdout. Never suppressed.
    pub fn issue(&self, msg: &str) {
        println!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {:<14} {value}", key.style(self.styles.dim));
        }
    }
}

/// Renders command results in the mode selected on the command line.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render_version(version),
        }
    }

    /// Render a validation report for the document read from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_report(&self, source: &str, report: &ValidationReport) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_report(source, report);
                Ok(())
            }
            Self::Json(r) => r.render_report(source, report),
        }
    }

    /// Render an imported or instantiated agent and what happened on save.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_generated(
        &self,
        generated: &GeneratedAgent,
        saved: Option<&SaveOutcome>,
    ) -> Result<()> {
        match self {
            Self::Human(r) => r.render_generated(generated, saved),
            Self::Json(r) => r.render_generated(generated, saved),
        }
    }

    /// Render a list of blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_blocks(&self, blocks: &[&BlockDescriptor]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_blocks(blocks);
                Ok(())
            }
            Self::Json(r) => r.render_blocks(blocks),
        }
    }

    /// Render one block in full.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_block(&self, block: &BlockDescriptor) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_block(block);
                Ok(())
            }
            Self::Json(r) => r.render_block(block),
        }
    }

    /// Render the prompt-ready block summary.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_blocks_summary(&self, summary: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_blocks_summary(summary);
                Ok(())
            }
            Self::Json(r) => r.render_blocks_summary(summary),
        }
    }

    /// Render a list of templates.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_templates(&self, templates: &[&AgentTemplate]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_templates(templates);
                Ok(())
            }
            Self::Json(r) => r.render_templates(templates),
        }
    }

    /// Render one template in full.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_template(&self, template: &AgentTemplate) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_template(template);
                Ok(())
            }
            Self::Json(r) => r.render_template(template),
        }
    }

    /// Render the saved agents found in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_saved_agents(&self, dir: &Path, agents: &[SavedAgent]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_saved_agents(dir, agents);
                Ok(())
            }
            Self::Json(r) => r.render_saved_agents(dir, agents),
        }
    }

    /// Render the configuration file contents and effective locations.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(
        &self,
        config: &AgentforgeConfig,
        path: &Path,
        output_dir: &Path,
    ) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path, output_dir);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path, output_dir),
        }
    }
}
