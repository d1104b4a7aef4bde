//! niwin configuration system.
//!
//! TOML-based configuration with validation and environment overrides.
//! All config sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use niwin_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{apply_env_overrides, PASS_THROUGH_ENV};
pub use schema::{NiwinConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use niwin_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a default `config.toml` if none exists, applies environment
/// overrides, and validates the result.
pub fn load_config() -> Result<NiwinConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path, then apply overrides and validate.
pub fn load_config_from(path: &Path) -> Result<NiwinConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let mut config = toml_loader::load_from_path(path)?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &NiwinConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
