//! Global cursor position from `device_query`.

use device_query::{DeviceQuery, DeviceState};

use niwin_common::CursorPoint;
use niwin_overlay::CursorSource;

/// `device_query` index of the primary mouse button.
const PRIMARY_BUTTON: usize = 1;

/// Screen-space cursor reader. Starts disconnected so the app can be built
/// without touching the display server.
pub(super) struct DeviceCursor {
    state: Option<DeviceState>,
    scale_factor: f64,
}

impl Default for DeviceCursor {
    fn default() -> Self {
        Self {
            state: None,
            scale_factor: 1.0,
        }
    }
}

impl DeviceCursor {
    pub(super) fn connect(&mut self) {
        if self.state.is_none() {
            self.state = Some(DeviceState::new());
        }
    }

    pub(super) fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Whether the primary button is held, or `None` when disconnected.
    pub(super) fn primary_pressed(&self) -> Option<bool> {
        let state = self.state.as_ref()?;
        let mouse = state.get_mouse();
        Some(mouse.button_pressed.get(PRIMARY_BUTTON).copied().unwrap_or(false))
    }
}

impl CursorSource for DeviceCursor {
    fn cursor_position(&self) -> Option<CursorPoint> {
        let state = self.state.as_ref()?;
        let coords = state.get_mouse().coords;
        Some(to_physical(coords, native_scale(self.scale_factor)))
    }
}

/// macOS reports the cursor in points; window bounds are physical pixels.
fn native_scale(scale_factor: f64) -> f64 {
    if cfg!(target_os = "macos") {
        scale_factor
    } else {
        1.0
    }
}

pub(super) fn to_physical((x, y): (i32, i32), scale: f64) -> CursorPoint {
    CursorPoint::new(
        (f64::from(x) * scale).round() as i32,
        (f64::from(y) * scale).round() as i32,
    )
}
