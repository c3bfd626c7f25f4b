//! `agentforge new`: instantiate an agent from a template.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::agent_service;
use crate::commands::import::finish;
use crate::domain::agent::parse_override;

/// Arguments for the new command.
#[derive(Args)]
pub struct NewArgs {
    /// Template id (see `agentforge templates list`)
    #[arg(long, short = 't', value_name = "ID")]
    pub template: String,

    /// Override a top-level field; VALUE is JSON or a plain string
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Save the agent to the output directory
    #[arg(long)]
    pub save: bool,

    /// Filename to save under (default: derived from the agent name)
    #[arg(long, short = 'o', requires = "save", value_name = "NAME")]
    pub output: Option<String>,
}

/// Run the new command. Exits 1 when overrides leave the agent invalid.
pub fn run(app: &AppContext, args: &NewArgs) -> Result<ExitCode> {
    let overrides = args
        .overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let catalog = app.catalog()?;
    let now = chrono::Local::now();
    let generated = agent_service::generate_from_template(&catalog, &args.template, &overrides, &now)?;
    finish(app, &generated, args.save, args.output.as_deref())
}
