//! `OverlayHandle` backed by a winit window.

use std::sync::Arc;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::Window;

use niwin_common::{HostError, WindowBounds};
use niwin_overlay::OverlayHandle;

/// The overlay window as seen by the host. Bounds are outer bounds in
/// physical screen pixels, the same space the global cursor reports.
pub(super) struct WinitOverlay {
    window: Arc<Window>,
    close_requested: bool,
}

impl WinitOverlay {
    pub(super) fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            close_requested: false,
        }
    }

    pub(super) fn close_requested(&self) -> bool {
        self.close_requested
    }
}

impl OverlayHandle for WinitOverlay {
    fn bounds(&self) -> Option<WindowBounds> {
        // Not available on Wayland.
        let position = self.window.outer_position().ok()?;
        let size = self.window.outer_size();
        Some(WindowBounds::new(
            position.x,
            position.y,
            size.width as i32,
            size.height as i32,
        ))
    }

    fn set_bounds(&mut self, bounds: WindowBounds) -> Result<(), HostError> {
        self.window
            .set_outer_position(PhysicalPosition::new(bounds.x, bounds.y));
        let outer = self.window.outer_size();
        let inner = self.window.inner_size();
        let frame = (
            outer.width.saturating_sub(inner.width),
            outer.height.saturating_sub(inner.height),
        );
        // `None` means the resize is applied asynchronously.
        let _ = self
            .window
            .request_inner_size(inner_size_for(&bounds, frame));
        Ok(())
    }

    fn set_ignore_mouse_events(&mut self, ignore: bool, _forward: bool) -> Result<(), HostError> {
        // The cursor is polled globally, so move events need no forwarding.
        self.window
            .set_cursor_hittest(!ignore)
            .map_err(|e| HostError::NotSupported(e.to_string()))
    }

    fn close(&mut self) {
        self.close_requested = true;
    }
}

/// Inner size that yields the requested outer size given the window frame
/// (title bar and borders) in physical pixels.
pub(super) fn inner_size_for(bounds: &WindowBounds, frame: (u32, u32)) -> PhysicalSize<u32> {
    let width = (bounds.width.max(1) as u32).saturating_sub(frame.0).max(1);
    let height = (bounds.height.max(1) as u32).saturating_sub(frame.1).max(1);
    PhysicalSize::new(width, height)
}
