//! Application context: unified state passed to every command handler.
//!
//! `AppContext` carries output settings, the config store and the
//! per-invocation overrides so command signatures stay `(app, args)`.

use std::path::PathBuf;

use agentforge_core::Catalog;
use anyhow::Result;

use crate::application::services::{catalog_service, config_service};
use crate::infra::{DirCatalogSource, EmbeddedCatalogSource, FsAgentStore, YamlConfigStore};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Environment variable that answers every confirmation with "yes".
pub const YES_ENV: &str = "AGENTFORGE_YES";

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Answer confirmations with "yes" (also set by `AGENTFORGE_YES`).
    pub yes: bool,
    /// Catalog directory for this invocation only.
    pub catalog: Option<PathBuf>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration file store.
    pub config_store: YamlConfigStore,
    /// `--catalog` override, taking precedence over `catalog.dir`.
    pub catalog_dir: Option<PathBuf>,
    /// Confirmations are answered "yes" without prompting.
    pub assume_yes: bool,
    /// Never prompt; confirmations take their default answer.
    ///
    /// Set when the `CI` environment variable is present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        let assume_yes = flags.behaviour.yes || std::env::var(YES_ENV).is_ok();
        let non_interactive = std::env::var("CI").is_ok();

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store: YamlConfigStore,
            catalog_dir: flags.behaviour.catalog,
            assume_yes,
            non_interactive,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Ask the user for confirmation.
    ///
    /// Returns `true` under `--yes`. Without a terminal, in CI, or in JSON
    /// mode, returns `default` without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails.
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        if self.non_interactive || self.is_json() || !self.output.is_tty {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }

    /// Load the catalog selected by `--catalog`, then `catalog.dir`, then the
    /// built-in one.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be read or the catalog cannot be
    /// loaded.
    pub fn catalog(&self) -> Result<Catalog> {
        let config = config_service::load_config(&self.config_store)?;
        match catalog_service::catalog_dir(self.catalog_dir.as_deref(), &config) {
            Some(dir) => catalog_service::load_catalog(&DirCatalogSource::new(dir)?),
            None => catalog_service::load_catalog(&EmbeddedCatalogSource),
        }
    }

    /// The agent store rooted at the configured output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be read or no home directory
    /// exists for the default location.
    pub fn agent_store(&self) -> Result<FsAgentStore> {
        let config = config_service::load_config(&self.config_store)?;
        FsAgentStore::from_config(&config)
    }
}
