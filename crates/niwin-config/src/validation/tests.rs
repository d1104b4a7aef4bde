//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&NiwinConfig::default()).is_ok());
}

#[test]
fn catches_poll_interval_too_fast() {
    let mut config = NiwinConfig::default();
    config.pass_through.poll_interval_ms = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pass_through.poll_interval_ms"));
}

#[test]
fn catches_negative_edge_margin() {
    let mut config = NiwinConfig::default();
    config.hit_zones.edge_margin = -4;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hit_zones.edge_margin"));
}

#[test]
fn catches_zero_min_height() {
    let mut config = NiwinConfig::default();
    config.resize.min_height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("resize.min_height"));
}

#[test]
fn catches_window_smaller_than_minimum() {
    let mut config = NiwinConfig::default();
    config.window.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = NiwinConfig::default();
    config.resize.frame_interval_ms = 0;
    config.hit_zones.menu_padding = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("resize.frame_interval_ms"));
    assert!(err.contains("hit_zones.menu_padding"));
    assert!(err.contains("; "));
}
