//! `agentforge templates`: browse agent templates.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::services::catalog_service;

/// Templates subcommands.
#[derive(Subcommand)]
pub enum TemplatesCommand {
    /// List all templates
    List,
    /// Show one template and its task plan
    Show {
        /// Template id
        id: String,
    },
    /// Find templates related to a free-text request
    Search {
        /// Request text; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

/// Run the templates command.
pub fn run(app: &AppContext, cmd: TemplatesCommand) -> Result<ExitCode> {
    let catalog = app.catalog()?;
    let renderer = app.renderer();
    match cmd {
        TemplatesCommand::List => {
            let templates: Vec<_> = catalog.templates().iter().collect();
            renderer.render_templates(&templates)?;
        }
        TemplatesCommand::Show { id } => {
            let template = catalog_service::find_template(&catalog, &id)?;
            renderer.render_template(template)?;
        }
        TemplatesCommand::Search { query } => {
            renderer.render_templates(&catalog.search_templates(&query.join(" ")))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
