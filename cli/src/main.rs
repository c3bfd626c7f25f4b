//! agentforge CLI - Validate, instantiate and store AI agent definitions

use std::process::ExitCode;

use agentforge_cli::cli::Cli;
use agentforge_cli::output::json::{error_code, format_error};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            let message = format!("{e:#}");
            match format_error(&message, error_code(&e)) {
                Ok(obj) if json => println!("{obj}"),
                _ => eprintln!("Error: {message}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--json` stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
