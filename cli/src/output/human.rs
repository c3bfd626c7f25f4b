//! Human-readable terminal renderer.

use std::path::Path;

use agentforge_core::{AgentTemplate, BlockDescriptor, ValidationReport};
use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;
use serde_json::Value;

use crate::application::services::agent_service::{GeneratedAgent, SaveOutcome};
use crate::domain::agent::{GenerationMetadata, SavedAgent};
use crate::domain::config::AgentforgeConfig;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if !self.ctx.quiet {
            println!("agentforge {version}");
        }
    }

    /// Render a validation report. Issues are printed even when quiet.
    pub fn render_report(&self, source: &str, report: &ValidationReport) {
        if report.is_valid() {
            self.ctx.success(&format!("{source}: valid agent definition"));
            return;
        }
        let count = report.issues().len();
        let noun = if count == 1 { "issue" } else { "issues" };
        self.ctx.header(&format!("{source}: {count} {noun}"));
        for message in report.messages() {
            self.ctx.issue(&message);
        }
    }

    /// Render an imported or instantiated agent.
    ///
    /// A valid agent that was not saved is printed as JSON so it can be
    /// piped; a saved one is summarised by its path.
    pub fn render_generated(
        &self,
        generated: &GeneratedAgent,
        saved: Option<&SaveOutcome>,
    ) -> Result<()> {
        let label = generated.envelope.agent_name().unwrap_or("agent");
        self.render_report(label, &generated.report);

        if let GenerationMetadata::Import {
            suggested_templates,
            ..
        } = &generated.envelope.metadata
            && !suggested_templates.is_empty()
        {
            self.ctx.info(&format!(
                "Related templates: {}",
                suggested_templates.join(", ")
            ));
        }

        match saved {
            Some(SaveOutcome::Saved(path)) => {
                self.ctx.success(&format!("Saved to {}", path.display()));
            }
            Some(SaveOutcome::Declined(path)) => {
                self.ctx
                    .warn(&format!("Kept existing {}; nothing written", path.display()));
            }
            None if generated.report.is_valid() => {
                let text = serde_json::to_string_pretty(&generated.envelope)
                    .context("JSON serialization failed")?;
                println!("{text}");
            }
            None => {}
        }
        Ok(())
    }

    /// Render a block table.
    pub fn render_blocks(&self, blocks: &[&BlockDescriptor]) {
        if blocks.is_empty() {
            self.ctx.info("No matching blocks.");
            return;
        }
        if self.ctx.quiet {
            return;
        }
        for block in blocks {
            println!(
                "  {:<26} {:<14} {}",
                block.name.style(self.ctx.styles.ident),
                block.category.style(self.ctx.styles.dim),
                block.description
            );
        }
    }

    /// Render one block with its inputs and outputs.
    pub fn render_block(&self, block: &BlockDescriptor) {
        self.ctx.header(&block.name);
        self.ctx.kv("ID:", &block.id);
        self.ctx.kv("Category:", &block.category);
        self.ctx.kv("Description:", &block.description);
        if self.ctx.quiet {
            return;
        }
        println!();
        println!("  {}", "Inputs:".style(self.ctx.styles.bold));
        for (name, spec) in &block.inputs {
            let kind = spec
                .metadata
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("any");
            let required = if spec.required { "required" } else { "optional" };
            println!("    {name:<20} {kind:<10} {required}");
        }
        println!("  {}", "Outputs:".style(self.ctx.styles.bold));
        for name in block.outputs.keys() {
            println!("    {name}");
        }
        if !block.capabilities.is_empty() {
            println!(
                "  {} {}",
                "Capabilities:".style(self.ctx.styles.bold),
                block.capabilities.join(", ")
            );
        }
    }

    /// Print the prompt-ready summary verbatim.
    pub fn render_blocks_summary(&self, summary: &str) {
        println!("{summary}");
    }

    /// Render a template table.
    pub fn render_templates(&self, templates: &[&AgentTemplate]) {
        if templates.is_empty() {
            self.ctx.info("No matching templates.");
            return;
        }
        if self.ctx.quiet {
            return;
        }
        for template in templates {
            println!(
                "  {:<22} {:<26} {}",
                template.id.style(self.ctx.styles.ident),
                template.name,
                template.description.style(self.ctx.styles.dim)
            );
        }
        println!();
        println!("Instantiate one: agentforge new --template <ID>");
    }

    /// Render one template with its task plan.
    pub fn render_template(&self, template: &AgentTemplate) {
        self.ctx.header(&template.name);
        self.ctx.kv("ID:", &template.id);
        self.ctx.kv("Description:", &template.description);
        self.ctx.kv("Keywords:", &template.keywords.join(", "));
        if self.ctx.quiet {
            return;
        }
        let tasks = template
            .agent_config
            .get("tasks")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        println!();
        println!("  {}", "Tasks:".style(self.ctx.styles.bold));
        for (idx, task) in tasks.iter().enumerate() {
            let id = task.get("id").and_then(Value::as_str).unwrap_or("?");
            let block = task.get("blockName").and_then(Value::as_str).unwrap_or("?");
            println!("    {}. {id:<20} → {block}", idx + 1);
        }
    }

    /// Render saved agent files.
    pub fn render_saved_agents(&self, dir: &Path, agents: &[SavedAgent]) {
        if agents.is_empty() {
            if !self.ctx.quiet {
                println!("No saved agents in {}.", dir.display());
                println!("Save one: agentforge import <FILE> --save");
            }
            return;
        }
        if self.ctx.quiet {
            return;
        }
        println!("Saved agents in {}:\n", dir.display());
        for agent in agents {
            let name = agent.name.as_deref().unwrap_or("(unreadable)");
            let origin = agent
                .template_id
                .as_deref()
                .map(|t| format!("  [{t}]"))
                .unwrap_or_default();
            println!("  {:<44} {name}{origin}", agent.filename);
        }
    }

    /// Render the current agentforge configuration.
    pub fn render_config(&self, config: &AgentforgeConfig, path: &Path, output_dir: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        let catalog = config
            .catalog
            .dir
            .as_ref()
            .map_or_else(|| "(built-in)".to_string(), |d| d.display().to_string());
        println!("  {:<20} {catalog}", "catalog.dir:");
        println!("  {:<20} {}", "output.dir:", output_dir.display());
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["AGENTFORGE_CONFIG", "AGENTFORGE_CATALOG", "NO_COLOR"] {
            println!(
                "    {:<20} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}
