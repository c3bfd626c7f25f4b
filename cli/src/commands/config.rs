//! `agentforge config`: show and set configuration values.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::{AgentStore as _, ConfigStore as _};
use crate::application::services::config_service;
use crate::infra::FsAgentStore;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value (`default` resets it)
    Set {
        /// Configuration key (catalog.dir, output.dir)
        key: String,
        /// Configuration value
        value: String,
    },
}

/// Run the config command.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => show_config(app),
        ConfigCommand::Set { key, value } => set_config(app, &key, &value),
    }
}

fn show_config(app: &AppContext) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let path = app.config_store.path()?;
    let store = FsAgentStore::from_config(&config)?;
    app.renderer().render_config(&config, &path, store.dir())?;
    Ok(ExitCode::SUCCESS)
}

fn set_config(app: &AppContext, key: &str, value: &str) -> Result<ExitCode> {
    config_service::set_value(&app.config_store, key, value)?;
    app.output.success(&format!("Set {key} = {value}"));
    Ok(ExitCode::SUCCESS)
}
