//! Recording fakes shared by the unit tests.

use std::cell::Cell;

use niwin_common::{CursorPoint, HostError, PointerId, WindowBounds};

use crate::host::{CursorSource, OverlayHandle};
use crate::resize::{BoundsFetch, FrameHandle, ResizeHost};

// =============================================================================
// HOST SIDE
// =============================================================================

#[derive(Debug, Default)]
pub struct FakeWindow {
    pub bounds: Option<WindowBounds>,
    pub ignore_calls: Vec<(bool, bool)>,
    pub set_bounds_calls: Vec<WindowBounds>,
    pub closed: bool,
    pub fail_ignore: bool,
    pub fail_set_bounds: bool,
}

impl FakeWindow {
    pub fn new(bounds: WindowBounds) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::default()
        }
    }
}

impl OverlayHandle for FakeWindow {
    fn bounds(&self) -> Option<WindowBounds> {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: WindowBounds) -> Result<(), HostError> {
        if self.fail_set_bounds {
            return Err(HostError::Rejected("set_bounds disabled".into()));
        }
        self.set_bounds_calls.push(bounds);
        self.bounds = Some(bounds);
        Ok(())
    }

    fn set_ignore_mouse_events(&mut self, ignore: bool, forward: bool) -> Result<(), HostError> {
        self.ignore_calls.push((ignore, forward));
        if self.fail_ignore {
            return Err(HostError::NotSupported("cursor hittest".into()));
        }
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

pub struct FakeCursor(Cell<Option<CursorPoint>>);

impl FakeCursor {
    pub fn at(x: i32, y: i32) -> Self {
        Self(Cell::new(Some(CursorPoint::new(x, y))))
    }

    pub fn none() -> Self {
        Self(Cell::new(None))
    }

    pub fn set(&self, x: i32, y: i32) {
        self.0.set(Some(CursorPoint::new(x, y)));
    }
}

impl CursorSource for FakeCursor {
    fn cursor_position(&self) -> Option<CursorPoint> {
        self.0.get()
    }
}

// =============================================================================
// UI SIDE
// =============================================================================

#[derive(Debug)]
pub struct FakeResizeHost {
    pub supports_bounds: bool,
    pub captured: Option<PointerId>,
    pub captures: Vec<PointerId>,
    pub releases: Vec<PointerId>,
    pub bounds_requests: Vec<BoundsFetch>,
    pub frames_requested: Vec<FrameHandle>,
    pub frames_cancelled: Vec<FrameHandle>,
    pub submitted: Vec<WindowBounds>,
    next_frame: u64,
}

impl Default for FakeResizeHost {
    fn default() -> Self {
        Self {
            supports_bounds: true,
            captured: None,
            captures: Vec::new(),
            releases: Vec::new(),
            bounds_requests: Vec::new(),
            frames_requested: Vec::new(),
            frames_cancelled: Vec::new(),
            submitted: Vec::new(),
            next_frame: 1,
        }
    }
}

impl FakeResizeHost {
    /// A surface that cannot read or write window bounds.
    pub fn without_bounds() -> Self {
        Self {
            supports_bounds: false,
            ..Self::default()
        }
    }

    /// The most recently requested frame that has not been cancelled.
    pub fn live_frame(&self) -> Option<FrameHandle> {
        self.frames_requested
            .last()
            .copied()
            .filter(|f| !self.frames_cancelled.contains(f))
    }
}

impl ResizeHost for FakeResizeHost {
    fn supports_bounds(&self) -> bool {
        self.supports_bounds
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        self.captures.push(pointer);
        self.captured = Some(pointer);
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        self.releases.push(pointer);
        if self.captured == Some(pointer) {
            self.captured = None;
        }
    }

    fn has_pointer_capture(&self, pointer: PointerId) -> bool {
        self.captured == Some(pointer)
    }

    fn request_bounds(&mut self, fetch: BoundsFetch) {
        self.bounds_requests.push(fetch);
    }

    fn request_frame(&mut self) -> FrameHandle {
        let frame = FrameHandle(self.next_frame);
        self.next_frame += 1;
        self.frames_requested.push(frame);
        frame
    }

    fn cancel_frame(&mut self, frame: FrameHandle) {
        self.frames_cancelled.push(frame);
    }

    fn submit_bounds(&mut self, bounds: WindowBounds) {
        self.submitted.push(bounds);
    }
}
