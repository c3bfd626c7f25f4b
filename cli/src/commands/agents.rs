//! `agentforge agents`: saved agent files.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::AgentStore as _;
use crate::application::services::agent_service;

/// Agents subcommands.
#[derive(Subcommand)]
pub enum AgentsCommand {
    /// List saved agents
    List,
}

/// Run the agents command.
pub fn run(app: &AppContext, cmd: AgentsCommand) -> Result<ExitCode> {
    match cmd {
        AgentsCommand::List => {
            let store = app.agent_store()?;
            let agents = agent_service::list_agents(&store)?;
            app.renderer().render_saved_agents(store.dir(), &agents)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
