//! Pointer-driven resize gesture controller.
//!
//! The controller is synchronous. Anything asynchronous (the bounds fetch,
//! the frame callback) goes through [`ResizeHost`], and the host feeds the
//! result back through [`ResizeController::on_bounds_resolved`] and
//! [`ResizeController::on_frame`].

use niwin_common::{HostError, PointerId, WindowBounds};
use tracing::{debug, warn};

use super::frame::FrameHandle;
use super::mailbox::PendingResize;
use super::session::{Anchor, BoundsFetch, GestureState, GestureToken, ResizeLimits, ResizeSession};

/// Button index of the primary mouse button.
pub const PRIMARY_BUTTON: u16 = 0;

/// UI-side services the controller needs from its surface.
pub trait ResizeHost {
    /// Whether the host can both read and write window bounds.
    fn supports_bounds(&self) -> bool;

    fn capture_pointer(&mut self, pointer: PointerId);
    fn release_pointer(&mut self, pointer: PointerId);
    fn has_pointer_capture(&self, pointer: PointerId) -> bool;

    /// Start fetching the current bounds. The result must be delivered to
    /// [`ResizeController::on_bounds_resolved`] with the same `fetch`.
    fn request_bounds(&mut self, fetch: BoundsFetch);

    /// Schedule one frame callback.
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, frame: FrameHandle);

    /// Send new bounds to the host window. Fire-and-forget.
    fn submit_bounds(&mut self, bounds: WindowBounds);
}

/// Owns at most one resize gesture for a single resize handle.
#[derive(Debug)]
pub struct ResizeController {
    limits: ResizeLimits,
    session: Option<ResizeSession>,
    pending: PendingResize,
    next_token: u64,
}

impl ResizeController {
    pub fn new(limits: ResizeLimits) -> Self {
        Self {
            limits,
            session: None,
            pending: PendingResize::new(),
            next_token: 1,
        }
    }

    pub fn limits(&self) -> ResizeLimits {
        self.limits
    }

    pub fn state(&self) -> GestureState {
        self.session
            .as_ref()
            .map_or(GestureState::Idle, ResizeSession::state)
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    pub fn pending(&self) -> Option<&WindowBounds> {
        self.pending.peek()
    }

    // =========================================================================
    // GESTURE START
    // =========================================================================

    /// Begin a gesture. Returns the bounds fetch that was issued, or `None`
    /// if the press was rejected.
    ///
    /// A press while another gesture is live supersedes it: the old
    /// gesture's pending bounds are flushed and its capture released.
    pub fn on_pointer_down<H: ResizeHost>(
        &mut self,
        host: &mut H,
        pointer: PointerId,
        button: u16,
    ) -> Option<BoundsFetch> {
        if button != PRIMARY_BUTTON || !host.supports_bounds() {
            return None;
        }

        if let Some(old) = self.session.as_ref().map(|s| s.pointer) {
            debug!(%old, %pointer, "resize gesture superseded");
            self.finish(host, old);
        }

        let token = GestureToken(self.next_token);
        self.next_token += 1;

        host.capture_pointer(pointer);
        self.session = Some(ResizeSession::new(pointer, token));

        let fetch = BoundsFetch { token, pointer };
        host.request_bounds(fetch);
        debug!(%pointer, token = token.0, "resize gesture started");
        Some(fetch)
    }

    /// Deliver the bounds fetch result. Returns `true` if the gesture is now
    /// ready to track pointer moves.
    pub fn on_bounds_resolved<H: ResizeHost>(
        &mut self,
        host: &mut H,
        fetch: BoundsFetch,
        result: Result<Option<WindowBounds>, HostError>,
    ) -> bool {
        let current = self
            .session
            .as_ref()
            .is_some_and(|s| s.token == fetch.token && s.pointer == fetch.pointer);
        if !current {
            debug!(token = fetch.token.0, "discarding stale bounds fetch");
            return false;
        }

        match result {
            Ok(Some(bounds)) => {
                if let Some(session) = self.session.as_mut() {
                    session.anchor = Some(Anchor::from_bounds(&bounds));
                }
                true
            }
            Ok(None) => {
                debug!("window bounds unavailable, aborting resize");
                self.abort(host, fetch.pointer);
                false
            }
            Err(e) => {
                warn!(error = %e, "bounds fetch failed, aborting resize");
                self.abort(host, fetch.pointer);
                false
            }
        }
    }

    // =========================================================================
    // TRACKING
    // =========================================================================

    pub fn on_pointer_move<H: ResizeHost>(
        &mut self,
        host: &mut H,
        pointer: PointerId,
        screen_x: i32,
        screen_y: i32,
    ) {
        let Some(anchor) = self
            .session
            .as_ref()
            .filter(|s| s.pointer == pointer)
            .and_then(|s| s.anchor)
        else {
            return;
        };

        let bounds = anchor.bounds_for(screen_x, screen_y, self.limits);
        if self.pending.put(bounds) {
            let frame = host.request_frame();
            self.pending.set_frame(frame);
        }
    }

    /// Frame callback. Frames other than the one currently scheduled are
    /// ignored.
    pub fn on_frame<H: ResizeHost>(&mut self, host: &mut H, frame: FrameHandle) {
        if self.pending.frame() != Some(frame) {
            return;
        }
        self.pending.take_frame();
        self.flush_pending_resize(host);
    }

    /// Send the pending bounds, if any, and clear the slot.
    pub fn flush_pending_resize<H: ResizeHost>(&mut self, host: &mut H) {
        if let Some(bounds) = self.pending.take() {
            host.submit_bounds(bounds);
        }
    }

    // =========================================================================
    // GESTURE END
    // =========================================================================

    pub fn on_pointer_up<H: ResizeHost>(&mut self, host: &mut H, pointer: PointerId) {
        self.end(host, pointer, "pointer up");
    }

    pub fn on_pointer_cancel<H: ResizeHost>(&mut self, host: &mut H, pointer: PointerId) {
        self.end(host, pointer, "pointer cancel");
    }

    pub fn on_lost_pointer_capture<H: ResizeHost>(&mut self, host: &mut H, pointer: PointerId) {
        self.end(host, pointer, "lost capture");
    }

    /// Drop the gesture without flushing. Used when the handle goes away.
    pub fn teardown<H: ResizeHost>(&mut self, host: &mut H) {
        if let Some(frame) = self.pending.take_frame() {
            host.cancel_frame(frame);
        }
        self.pending.clear();
        if let Some(session) = self.session.take() {
            if host.has_pointer_capture(session.pointer) {
                host.release_pointer(session.pointer);
            }
        }
    }

    fn end<H: ResizeHost>(&mut self, host: &mut H, pointer: PointerId, reason: &str) {
        let owns = self.session.as_ref().is_some_and(|s| s.pointer == pointer);
        if owns {
            debug!(%pointer, reason, "resize gesture ended");
            self.finish(host, pointer);
        } else if host.has_pointer_capture(pointer) {
            host.release_pointer(pointer);
        }
    }

    /// Release capture, cancel the frame, flush once, and clear the session.
    fn finish<H: ResizeHost>(&mut self, host: &mut H, pointer: PointerId) {
        if host.has_pointer_capture(pointer) {
            host.release_pointer(pointer);
        }
        if let Some(frame) = self.pending.take_frame() {
            host.cancel_frame(frame);
        }
        self.flush_pending_resize(host);
        self.session = None;
    }

    fn abort<H: ResizeHost>(&mut self, host: &mut H, pointer: PointerId) {
        if host.has_pointer_capture(pointer) {
            host.release_pointer(pointer);
        }
        self.session = None;
    }
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new(ResizeLimits::default())
    }
}
