//! Single-slot mailbox for coalesced bounds updates.

use niwin_common::WindowBounds;

use super::frame::FrameHandle;

/// At most one unflushed payload plus the frame scheduled to flush it.
///
/// Writes between frames overwrite each other; only the latest survives.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PendingResize {
    payload: Option<WindowBounds>,
    frame: Option<FrameHandle>,
}

impl PendingResize {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a payload. Returns `true` if the caller must schedule a frame.
    pub fn put(&mut self, bounds: WindowBounds) -> bool {
        self.payload = Some(bounds);
        self.frame.is_none()
    }

    pub fn take(&mut self) -> Option<WindowBounds> {
        self.payload.take()
    }

    pub fn peek(&self) -> Option<&WindowBounds> {
        self.payload.as_ref()
    }

    pub fn set_frame(&mut self, frame: FrameHandle) {
        self.frame = Some(frame);
    }

    pub fn frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Forget the scheduled frame, returning it so it can be cancelled.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frame.take()
    }

    pub fn clear(&mut self) {
        self.payload = None;
        self.frame = None;
    }
}
