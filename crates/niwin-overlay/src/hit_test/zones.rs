//! Interactive zone geometry.
//!
//! Zones are derived from the live window bounds every time they are
//! needed and never stored, so they follow the window through moves and
//! resizes without any invalidation.

use niwin_common::{CursorPoint, WindowBounds, Zone};
use niwin_config::schema::HitZoneConfig;

// =============================================================================
// TYPES
// =============================================================================

/// One of the four window edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Where the cursor sits relative to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// Menu toggle button hot-zone.
    Menu,
    /// Control panel hot-zone, whether or not the panel is open.
    Panel,
    /// OS resize strip along an edge.
    Edge(Edge),
    /// Anywhere else: clicks belong to the application behind the overlay.
    Background,
}

impl HitRegion {
    pub fn captures_input(self) -> bool {
        !matches!(self, HitRegion::Background)
    }
}

/// All interactive zones for one set of window bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitZones {
    pub menu: Zone,
    pub panel: Zone,
    pub left: Zone,
    pub right: Zone,
    pub top: Zone,
    pub bottom: Zone,
}

// =============================================================================
// COMPUTATION
// =============================================================================

impl HitZones {
    /// Derive the zones from the window's current bounds.
    pub fn compute(bounds: &WindowBounds, config: &HitZoneConfig) -> Self {
        let right = bounds.right();
        let bottom = bounds.bottom();
        let pad = config.menu_padding;
        let margin = config.edge_margin;

        let menu = Zone::new(
            right - config.menu_width - pad,
            bounds.y - pad,
            right + pad,
            bounds.y + config.menu_height + pad,
        );

        let panel_right = right - config.panel_right_inset;
        let panel = Zone::new(
            panel_right - config.panel_width,
            bounds.y - config.panel_overhang,
            panel_right,
            bounds.y + config.panel_drop,
        );

        Self {
            menu,
            panel,
            left: Zone::new(bounds.x, bounds.y, bounds.x + margin, bottom),
            right: Zone::new(right - margin, bounds.y, right, bottom),
            top: Zone::new(bounds.x, bounds.y, right, bounds.y + margin),
            bottom: Zone::new(bounds.x, bottom - margin, right, bottom),
        }
    }

    /// Classify a cursor position. Menu wins over panel, panel over edges.
    pub fn classify(&self, cursor: CursorPoint) -> HitRegion {
        if self.menu.contains(cursor) {
            HitRegion::Menu
        } else if self.panel.contains(cursor) {
            HitRegion::Panel
        } else if self.left.contains(cursor) {
            HitRegion::Edge(Edge::Left)
        } else if self.right.contains(cursor) {
            HitRegion::Edge(Edge::Right)
        } else if self.top.contains(cursor) {
            HitRegion::Edge(Edge::Top)
        } else if self.bottom.contains(cursor) {
            HitRegion::Edge(Edge::Bottom)
        } else {
            HitRegion::Background
        }
    }
}

/// Whether the window should let clicks through for this cursor position.
pub fn should_ignore(bounds: &WindowBounds, cursor: CursorPoint, config: &HitZoneConfig) -> bool {
    !HitZones::compute(bounds, config)
        .classify(cursor)
        .captures_input()
}

// =============================================================================
// TESTS
// =============================================================================
