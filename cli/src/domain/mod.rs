//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod agent;
pub mod config;
pub mod error;

pub use config::{AgentforgeConfig, validate_config_key, validate_config_value};
pub use error::{AgentError, CatalogLoadError, ConfigError, LookupError};
