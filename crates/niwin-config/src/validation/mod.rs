//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod zones;

#[cfg(test)]
mod tests;

use crate::schema::NiwinConfig;
use niwin_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &NiwinConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_pass_through(&mut errors, config);
    zones::validate_hit_zones(&mut errors, config);
    misc::validate_resize(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
