//! Environment variable overrides applied on top of the loaded file.

use tracing::{info, warn};

use crate::schema::NiwinConfig;

/// Turns click-through on or off regardless of the config file.
pub const PASS_THROUGH_ENV: &str = "NIWIN_PASS_THROUGH";

/// Apply overrides read from the process environment.
pub fn apply_env_overrides(config: &mut NiwinConfig) {
    apply_pass_through_override(config, std::env::var(PASS_THROUGH_ENV).ok().as_deref());
}

pub(crate) fn apply_pass_through_override(config: &mut NiwinConfig, value: Option<&str>) {
    let Some(raw) = value else {
        return;
    };
    match parse_flag(raw) {
        Some(enabled) => {
            info!(enabled, "{PASS_THROUGH_ENV} overrides pass_through.enabled");
            config.pass_through.enabled = enabled;
        }
        None => warn!(value = raw, "ignoring unrecognized {PASS_THROUGH_ENV} value"),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
