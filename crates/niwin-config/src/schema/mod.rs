//! Configuration schema types for niwin.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod hit_zones;
mod logging;
mod pass_through;
mod resize;
mod window;

pub use hit_zones::*;
pub use logging::*;
pub use pass_through::*;
pub use resize::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for niwin.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct NiwinConfig {
    pub window: WindowConfig,
    pub pass_through: PassThroughConfig,
    pub hit_zones: HitZoneConfig,
    pub resize: ResizeConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
