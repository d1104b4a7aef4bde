//! Validation for pass-through pacing, resize limits, and window size.

use crate::schema::NiwinConfig;

use super::helpers::{validate_range, validate_range_u64};

pub(crate) fn validate_pass_through(errors: &mut Vec<String>, config: &NiwinConfig) {
    validate_range_u64(
        errors,
        "pass_through.poll_interval_ms",
        config.pass_through.poll_interval_ms,
        10,
        1000,
    );
}

pub(crate) fn validate_resize(errors: &mut Vec<String>, config: &NiwinConfig) {
    validate_range(errors, "resize.min_width", config.resize.min_width, 1, 10_000);
    validate_range(
        errors,
        "resize.min_height",
        config.resize.min_height,
        1,
        10_000,
    );
    validate_range_u64(
        errors,
        "resize.frame_interval_ms",
        config.resize.frame_interval_ms,
        1,
        250,
    );
    validate_range(errors, "resize.handle_size", config.resize.handle_size, 4, 200);
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &NiwinConfig) {
    let w = &config.window;
    if (w.width as i64) < config.resize.min_width as i64 {
        errors.push(format!(
            "window.width = {} is below resize.min_width = {}",
            w.width, config.resize.min_width
        ));
    }
    if (w.height as i64) < config.resize.min_height as i64 {
        errors.push(format!(
            "window.height = {} is below resize.min_height = {}",
            w.height, config.resize.min_height
        ));
    }
}
