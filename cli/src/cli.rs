//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Validate, instantiate and store AI agent definitions
#[derive(Parser)]
#[command(
    name = "agentforge",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to confirmations (e.g. overwriting a saved agent)
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Catalog directory with blocks.json and templates.json
    #[arg(long, global = true, env = "AGENTFORGE_CATALOG", value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check an agent definition against the catalog
    Validate(commands::validate::ValidateArgs),

    /// Import a generated agent definition (raw model output)
    Import(commands::import::ImportArgs),

    /// Create an agent from a template
    New(commands::new::NewArgs),

    /// Browse catalog blocks
    #[command(subcommand)]
    Blocks(commands::blocks::BlocksCommand),

    /// Browse agent templates
    #[command(subcommand)]
    Templates(commands::templates::TemplatesCommand),

    /// Manage saved agents
    #[command(subcommand)]
    Agents(commands::agents::AgentsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            yes,
            catalog,
            command,
        } = self;
        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes, catalog },
        });

        match command {
            Command::Validate(args) => commands::validate::run(&app, &args),
            Command::Import(args) => commands::import::run(&app, &args),
            Command::New(args) => commands::new::run(&app, &args),
            Command::Blocks(cmd) => commands::blocks::run(&app, cmd),
            Command::Templates(cmd) => commands::templates::run(&app, cmd),
            Command::Agents(cmd) => commands::agents::run(&app, cmd),
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => commands::version::run(&app),
        }
    }
}
