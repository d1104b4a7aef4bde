//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Overlay window appearance at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner size in logical pixels.
    pub width: u32,
    pub height: u32,
    pub always_on_top: bool,
    pub transparent: bool,
    /// Show the OS title bar and borders.
    pub decorations: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "niwin".into(),
            width: 540,
            height: 360,
            always_on_top: true,
            transparent: true,
            decorations: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "niwin");
        assert_eq!((config.width, config.height), (540, 360));
        assert!(config.always_on_top);
        assert!(config.transparent);
        assert!(!config.decorations);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "HUD"
width = 800
decorations = true
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "HUD");
        assert_eq!(config.width, 800);
        assert!(config.decorations);
        // Defaults preserved
        assert_eq!(config.height, 360);
        assert!(config.always_on_top);
    }
}
