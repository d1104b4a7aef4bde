//! Click-through configuration types.

use serde::{Deserialize, Serialize};

/// Controls whether the overlay lets clicks fall through to the
/// applications behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PassThroughConfig {
    /// Master switch. When off the window always captures input.
    pub enabled: bool,
    /// Hit-test poll cadence in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for PassThroughConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval_ms: 80,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
