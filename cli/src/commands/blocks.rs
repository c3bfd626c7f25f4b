//! `agentforge blocks`: browse catalog blocks.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::services::catalog_service;

/// Blocks subcommands.
#[derive(Subcommand)]
pub enum BlocksCommand {
    /// List all blocks
    List {
        /// Only blocks in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one block by name or id
    Show {
        /// Block name or id (exact, case-sensitive)
        name: String,
    },
    /// Find blocks whose capabilities or description match any keyword
    Search {
        /// Keywords (case-insensitive substrings)
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
    },
    /// Print the block summary used in generation prompts
    Summary,
}

/// Run the blocks command.
pub fn run(app: &AppContext, cmd: BlocksCommand) -> Result<ExitCode> {
    let catalog = app.catalog()?;
    let renderer = app.renderer();
    match cmd {
        BlocksCommand::List { category } => {
            let blocks: Vec<_> = catalog
                .blocks()
                .iter()
                .filter(|b| {
                    category
                        .as_deref()
                        .is_none_or(|c| b.category.eq_ignore_ascii_case(c))
                })
                .collect();
            renderer.render_blocks(&blocks)?;
        }
        BlocksCommand::Show { name } => {
            let block = catalog_service::find_block(&catalog, &name)?;
            renderer.render_block(block)?;
        }
        BlocksCommand::Search { keywords } => {
            renderer.render_blocks(&catalog.search_blocks(&keywords))?;
        }
        BlocksCommand::Summary => renderer.render_blocks_summary(&catalog.blocks_summary())?,
    }
    Ok(ExitCode::SUCCESS)
}
