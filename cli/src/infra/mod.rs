//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: configuration files, catalog
//! files and the agent output directory.
//!
//! Imports from `crate::domain`, `crate::application::ports` and
//! `crate::assets` are allowed. Imports from `crate::commands` or
//! `crate::output` are forbidden.

pub mod agent_store;
pub mod catalog;
pub mod config;

pub use agent_store::FsAgentStore;
pub use catalog::{DirCatalogSource, EmbeddedCatalogSource};
pub use config::YamlConfigStore;
