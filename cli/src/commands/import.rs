//! `agentforge import`: wrap raw generator output as an agent.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::agent_service::{self, GeneratedAgent};
use crate::commands::read_input;

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// Model response holding the agent JSON (fences allowed), or `-` for stdin
    pub file: String,

    /// The request the agent was generated from; used to suggest templates
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Save the agent to the output directory when it is valid
    #[arg(long)]
    pub save: bool,

    /// Filename to save under (default: derived from the agent name)
    #[arg(long, short = 'o', requires = "save", value_name = "NAME")]
    pub output: Option<String>,
}

/// Run the import command. Exits 1 when the agent has issues.
pub fn run(app: &AppContext, args: &ImportArgs) -> Result<ExitCode> {
    let catalog = app.catalog()?;
    let (_, text) = read_input(&args.file)?;
    let now = chrono::Local::now();
    let generated =
        agent_service::import_response(&text, args.description.as_deref(), &catalog, &now)?;
    finish(app, &generated, args.save, args.output.as_deref())
}

/// Save when asked and the agent is valid, then render. Shared with `new`.
pub(crate) fn finish(
    app: &AppContext,
    generated: &GeneratedAgent,
    save: bool,
    filename: Option<&str>,
) -> Result<ExitCode> {
    if !generated.report.is_valid() {
        app.renderer().render_generated(generated, None)?;
        if save {
            app.output.error("Agent not saved: fix the issues above first");
        }
        return Ok(ExitCode::FAILURE);
    }

    let outcome = if save {
        let store = app.agent_store()?;
        let now = chrono::Local::now();
        Some(agent_service::save_agent(
            &store,
            generated,
            filename,
            &now,
            |path| app.confirm(&format!("{} exists. Overwrite?", path.display()), false),
        )?)
    } else {
        None
    };
    app.renderer().render_generated(generated, outcome.as_ref())?;
    Ok(ExitCode::SUCCESS)
}
