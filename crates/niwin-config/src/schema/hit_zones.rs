//! Interactive hot-zone geometry.
//!
//! Every zone is recomputed from the live window bounds on each poll,
//! so only offsets and sizes live here.

use serde::{Deserialize, Serialize};

/// Sizes and offsets of the zones where the overlay captures input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitZoneConfig {
    /// Menu toggle hot-zone, anchored to the top-right corner.
    pub menu_width: i32,
    pub menu_height: i32,
    /// Outward padding applied to every side of the menu zone.
    pub menu_padding: i32,
    /// Control panel hot-zone, inset from the right edge.
    pub panel_width: i32,
    /// How far the panel zone reaches above the window's top edge.
    pub panel_overhang: i32,
    /// How far the panel zone reaches down from the top edge.
    pub panel_drop: i32,
    pub panel_right_inset: i32,
    /// Width of the resize strips along each window edge.
    pub edge_margin: i32,
}

impl Default for HitZoneConfig {
    fn default() -> Self {
        Self {
            menu_width: 200,
            menu_height: 160,
            menu_padding: 16,
            panel_width: 240,
            panel_overhang: 40,
            panel_drop: 140,
            panel_right_inset: 120,
            edge_margin: 24,
        }
    }
}
