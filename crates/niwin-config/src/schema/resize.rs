//! Resize gesture configuration types.

use serde::{Deserialize, Serialize};

/// Limits and pacing for the drag-to-resize handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    pub min_width: i32,
    pub min_height: i32,
    /// Minimum spacing between bounds updates sent to the host (one frame).
    pub frame_interval_ms: u64,
    /// Edge length of the square resize handle at the top-right corner.
    pub handle_size: i32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_width: 200,
            min_height: 130,
            frame_interval_ms: 16,
            handle_size: 24,
        }
    }
}
