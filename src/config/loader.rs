//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply environment
/// overrides, and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    load_with(path, |key| std::env::var(key).ok())
}

fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config, lookup).map_err(ConfigError::Validation)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Override file values with `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`,
/// `DB_NAME` and `PORT`. Unset and empty variables leave the value alone.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F) -> Result<(), Vec<ValidationError>>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
    let mut errors = Vec::new();

    if let Some(host) = get("DB_HOST") {
        config.database.host = host;
    }
    if let Some(user) = get("DB_USER") {
        config.database.user = user;
    }
    if let Some(password) = get("DB_PASSWORD") {
        config.database.password = password;
    }
    if let Some(name) = get("DB_NAME") {
        config.database.name = name;
    }
    if let Some(port) = get("DB_PORT") {
        match port.parse() {
            Ok(port) => config.database.port = port,
            Err(_) => errors.push(ValidationError::InvalidNumber { field: "DB_PORT", value: port }),
        }
    }
    if let Some(port) = get("PORT") {
        match port.parse::<u16>() {
            Ok(port) => config.listener.bind_address = format!("0.0.0.0:{port}"),
            Err(_) => errors.push(ValidationError::InvalidNumber { field: "PORT", value: port }),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
