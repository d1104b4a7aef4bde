//! Per-gesture state: pointer identity, cancellation token, and anchor.

use niwin_common::{PointerId, WindowBounds};
use niwin_config::schema::ResizeConfig;

// =============================================================================
// TYPES
// =============================================================================

/// Identifies one resize gesture. A bounds fetch carries the token it was
/// issued for; a result whose token is no longer current is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureToken(pub u64);

/// An outstanding request for the window bounds at gesture start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsFetch {
    pub token: GestureToken,
    pub pointer: PointerId,
}

/// Minimum window size enforced while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeLimits {
    pub min_width: i32,
    pub min_height: i32,
}

impl ResizeLimits {
    pub fn from_config(config: &ResizeConfig) -> Self {
        Self {
            min_width: config.min_width,
            min_height: config.min_height,
        }
    }
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self::from_config(&ResizeConfig::default())
    }
}

/// The fixed corner of a gesture: left edge X and bottom edge Y, frozen at
/// gesture start. Width grows rightward, height grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub origin_x: i32,
    pub bottom: i32,
}

impl Anchor {
    pub fn from_bounds(bounds: &WindowBounds) -> Self {
        Self {
            origin_x: bounds.x,
            bottom: bounds.bottom(),
        }
    }

    /// Bounds for a pointer at `(screen_x, screen_y)`, clamped to the limits.
    ///
    /// `y` is derived from the clamped height so the bottom edge never moves.
    pub fn bounds_for(&self, screen_x: i32, screen_y: i32, limits: ResizeLimits) -> WindowBounds {
        let width = (screen_x - self.origin_x).max(limits.min_width);
        let height = (self.bottom - screen_y).max(limits.min_height);
        WindowBounds::new(self.origin_x, self.bottom - height, width, height)
    }
}

/// Coarse gesture state, for callers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    AwaitingBounds,
    Ready,
}

/// A live resize gesture. Not ready until the anchor arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub pointer: PointerId,
    pub token: GestureToken,
    pub anchor: Option<Anchor>,
}

impl ResizeSession {
    pub fn new(pointer: PointerId, token: GestureToken) -> Self {
        Self {
            pointer,
            token,
            anchor: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn state(&self) -> GestureState {
        if self.is_ready() {
            GestureState::Ready
        } else {
            GestureState::AwaitingBounds
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
