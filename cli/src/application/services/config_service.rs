//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{
    AgentforgeConfig, apply_config_value, validate_config_key, validate_config_value,
};

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<AgentforgeConfig> {
    store.load()
}

/// Save configuration.
pub fn save_config(store: &impl ConfigStore, config: &AgentforgeConfig) -> Result<()> {
    store.save(config)
}

/// Validate and persist one `key = value`, returning the updated config.
///
/// # Errors
///
/// Returns an error for an unknown key or invalid value, or if the store
/// fails. Nothing is written when validation fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<AgentforgeConfig> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;

    let mut config = load_config(store)?;
    apply_config_value(&mut config, key, value)?;
    save_config(store, &config)?;
    tracing::info!(key, value, "configuration updated");
    Ok(config)
}
