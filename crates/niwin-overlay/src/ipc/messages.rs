use niwin_common::WindowBounds;
use serde::{Deserialize, Serialize};

/// Target bounds for a set-bounds call. Omitted `x`/`y` keep the current
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    pub width: i32,
    pub height: i32,
}

impl BoundsRequest {
    /// Resize in place.
    pub fn size(width: i32, height: i32) -> Self {
        Self {
            x: None,
            y: None,
            width,
            height,
        }
    }

    /// Merge with the current bounds. Sizes below one pixel become one.
    pub fn resolve(&self, current: &WindowBounds) -> WindowBounds {
        WindowBounds::new(
            self.x.unwrap_or(current.x),
            self.y.unwrap_or(current.y),
            self.width.max(1),
            self.height.max(1),
        )
    }
}

impl From<WindowBounds> for BoundsRequest {
    fn from(bounds: WindowBounds) -> Self {
        Self {
            x: Some(bounds.x),
            y: Some(bounds.y),
            width: bounds.width,
            height: bounds.height,
        }
    }
}

/// A call from the UI into the host window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum HostRequest {
    SetIgnoreMouseEvents { ignore: bool },
    GetWindowBounds,
    SetWindowBounds(BoundsRequest),
    CloseWindow,
    GetPassThroughEnabled,
}

impl HostRequest {
    /// Wire name of the request, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetIgnoreMouseEvents { .. } => "set_ignore_mouse_events",
            Self::GetWindowBounds => "get_window_bounds",
            Self::SetWindowBounds(_) => "set_window_bounds",
            Self::CloseWindow => "close_window",
            Self::GetPassThroughEnabled => "get_pass_through_enabled",
        }
    }
}

/// The host's answer to a [`HostRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum HostResponse {
    Ack,
    Bounds(Option<WindowBounds>),
    PassThroughEnabled(bool),
}
