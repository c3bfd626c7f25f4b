//! `agentforge validate`: check an agent definition.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::agent_service;
use crate::commands::read_input;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Agent JSON file (bare or saved envelope), or `-` for stdin
    pub file: String,
}

/// Run the validate command. Exits 1 when the report has issues.
pub fn run(app: &AppContext, args: &ValidateArgs) -> Result<ExitCode> {
    let catalog = app.catalog()?;
    let (source, text) = read_input(&args.file)?;
    let report = agent_service::validate_text(&text, &catalog)?;
    app.renderer().render_report(&source, &report)?;

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
