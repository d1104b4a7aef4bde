//! Host-side window abstraction and the overlay lifecycle owner.

mod overlay;

pub use overlay::OverlayHost;

use niwin_common::{CursorPoint, HostError, WindowBounds};

/// The privileged window object the host controls.
///
/// Implementations wrap a real OS window; tests use a recording fake.
pub trait OverlayHandle {
    /// Current outer bounds in screen pixels, or `None` once the window is gone.
    fn bounds(&self) -> Option<WindowBounds>;

    fn set_bounds(&mut self, bounds: WindowBounds) -> Result<(), HostError>;

    /// Toggle OS-level click-through. `forward` keeps mouse-move events
    /// flowing to the window while clicks pass through.
    fn set_ignore_mouse_events(&mut self, ignore: bool, forward: bool) -> Result<(), HostError>;

    /// Ask the window to close. Destruction is reported separately.
    fn close(&mut self);
}

/// Source of the global cursor position.
pub trait CursorSource {
    fn cursor_position(&self) -> Option<CursorPoint>;
}

impl<F> CursorSource for F
where
    F: Fn() -> Option<CursorPoint>,
{
    fn cursor_position(&self) -> Option<CursorPoint> {
        self()
    }
}
