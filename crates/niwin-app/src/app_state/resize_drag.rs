//! Resize handle: the UI surface the resize controller drives.
//!
//! The handle is a square at the window's top-right corner. Pressing it
//! starts a gesture whose anchor is the left and bottom edges, so the
//! corner follows the pointer.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use winit::event::{DeviceId, MouseButton};

use niwin_common::{PointerId, WindowBounds};
use niwin_overlay::{
    BoundsFetch, BoundsRequest, ChannelBridge, FrameHandle, HostBridge, IntervalFrameClock,
    ResizeHost,
};

use super::types::UiEvent;

// =============================================================================
// HIT TESTING
// =============================================================================

/// Whether a window-local physical point lies on the resize handle.
/// `handle_size` is in logical pixels.
pub fn in_resize_handle(
    local_x: f64,
    local_y: f64,
    window_width: u32,
    handle_size: i32,
    scale_factor: f64,
) -> bool {
    let size = f64::from(handle_size.max(0)) * scale_factor;
    let right = f64::from(window_width);
    local_x >= right - size && local_x <= right && local_y >= 0.0 && local_y <= size
}

/// Browser-style button index: 0 primary, 1 middle, 2 secondary.
pub fn button_index(button: MouseButton) -> u16 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Middle => 1,
        MouseButton::Right => 2,
        MouseButton::Back => 3,
        MouseButton::Forward => 4,
        MouseButton::Other(n) => n,
    }
}

/// Stable pointer identity for a winit input device.
pub fn pointer_id(device_id: DeviceId) -> PointerId {
    let mut hasher = DefaultHasher::new();
    device_id.hash(&mut hasher);
    PointerId(hasher.finish())
}

// =============================================================================
// SURFACE
// =============================================================================

/// UI-side services for the resize controller.
///
/// Bounds calls go through the host bridge on the tokio runtime; fetch
/// results come back to the event loop over `events`. Frames come from a
/// deadline timer the event loop polls.
pub(super) struct UiSurface {
    bridge: ChannelBridge,
    runtime: Option<Handle>,
    events: Sender<UiEvent>,
    frames: IntervalFrameClock,
    captured: Option<PointerId>,
}

impl UiSurface {
    pub(super) fn new(bridge: ChannelBridge, events: Sender<UiEvent>, frame_interval: Duration) -> Self {
        Self {
            bridge,
            runtime: None,
            events,
            frames: IntervalFrameClock::new(frame_interval),
            captured: None,
        }
    }

    /// Enable bounds calls. Until attached the surface cannot resize.
    pub(super) fn attach_runtime(&mut self, runtime: Handle) {
        self.runtime = Some(runtime);
    }

    pub(super) fn detach_runtime(&mut self) {
        self.runtime = None;
    }

    pub(super) fn events(&self) -> Sender<UiEvent> {
        self.events.clone()
    }

    pub(super) fn captured(&self) -> Option<PointerId> {
        self.captured
    }

    pub(super) fn poll_frame(&mut self, now: Instant) -> Option<FrameHandle> {
        self.frames.poll_due(now)
    }
}

impl ResizeHost for UiSurface {
    fn supports_bounds(&self) -> bool {
        self.runtime.is_some()
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        self.captured = Some(pointer);
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        if self.captured == Some(pointer) {
            self.captured = None;
        }
    }

    fn has_pointer_capture(&self, pointer: PointerId) -> bool {
        self.captured == Some(pointer)
    }

    fn request_bounds(&mut self, fetch: BoundsFetch) {
        let Some(ref runtime) = self.runtime else {
            let _ = self.events.send(UiEvent::BoundsResolved {
                fetch,
                result: Ok(None),
            });
            return;
        };
        let bridge = self.bridge.clone();
        let events = self.events.clone();
        runtime.spawn(async move {
            let result = bridge.get_window_bounds().await;
            let _ = events.send(UiEvent::BoundsResolved { fetch, result });
        });
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.frames.request(Instant::now())
    }

    fn cancel_frame(&mut self, frame: FrameHandle) {
        self.frames.cancel(frame);
    }

    fn submit_bounds(&mut self, bounds: WindowBounds) {
        let Some(ref runtime) = self.runtime else {
            return;
        };
        let bridge = self.bridge.clone();
        runtime.spawn(async move {
            if let Err(e) = bridge.set_window_bounds(BoundsRequest::from(bounds)).await {
                tracing::warn!(error = %e, ?bounds, "Failed to apply window bounds");
            }
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_covers_top_right_square() {
        assert!(in_resize_handle(530.0, 5.0, 540, 24, 1.0));
        assert!(in_resize_handle(516.0, 24.0, 540, 24, 1.0));
        assert!(in_resize_handle(540.0, 0.0, 540, 24, 1.0));
    }

    #[test]
    fn outside_handle() {
        assert!(!in_resize_handle(515.9, 5.0, 540, 24, 1.0));
        assert!(!in_resize_handle(530.0, 24.1, 540, 24, 1.0));
        assert!(!in_resize_handle(530.0, -1.0, 540, 24, 1.0));
        assert!(!in_resize_handle(10.0, 10.0, 540, 24, 1.0));
    }

    #[test]
    fn handle_scales_with_display() {
        // 24 logical pixels is 48 physical on a 2x display.
        assert!(in_resize_handle(1040.0, 40.0, 1080, 24, 2.0));
        assert!(!in_resize_handle(1040.0, 40.0, 1080, 24, 1.0));
        assert!(!in_resize_handle(1031.0, 10.0, 1080, 24, 2.0));
    }

    #[test]
    fn button_indices() {
        assert_eq!(button_index(MouseButton::Left), 0);
        assert_eq!(button_index(MouseButton::Middle), 1);
        assert_eq!(button_index(MouseButton::Right), 2);
        assert_eq!(button_index(MouseButton::Other(7)), 7);
    }

    #[test]
    fn pointer_id_is_stable_per_device() {
        // SAFETY: only compared and hashed, never passed to winit.
        let device = unsafe { DeviceId::dummy() };
        assert_eq!(pointer_id(device), pointer_id(device));
    }

    fn surface() -> (UiSurface, std::sync::mpsc::Receiver<UiEvent>) {
        let (bridge, _endpoint) = niwin_overlay::ipc::channel();
        let (tx, rx) = std::sync::mpsc::channel();
        (UiSurface::new(bridge, tx, Duration::from_millis(16)), rx)
    }

    #[test]
    fn detached_surface_cannot_resize() {
        let (surface, _rx) = surface();
        assert!(!surface.supports_bounds());
    }

    #[test]
    fn detached_fetch_resolves_to_none() {
        let (mut surface, rx) = surface();
        let fetch = BoundsFetch {
            token: niwin_overlay::GestureToken(1),
            pointer: PointerId(1),
        };
        surface.request_bounds(fetch);
        match rx.try_recv() {
            Ok(UiEvent::BoundsResolved { fetch: got, result }) => {
                assert_eq!(got, fetch);
                assert_eq!(result, Ok(None));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn capture_is_per_pointer() {
        let (mut surface, _rx) = surface();
        surface.capture_pointer(PointerId(1));
        assert!(surface.has_pointer_capture(PointerId(1)));
        surface.release_pointer(PointerId(2));
        assert_eq!(surface.captured(), Some(PointerId(1)));
        surface.release_pointer(PointerId(1));
        assert!(surface.captured().is_none());
    }

    #[test]
    fn frames_fire_after_interval() {
        let (mut surface, _rx) = surface();
        let frame = surface.request_frame();
        let later = Instant::now() + Duration::from_millis(20);
        assert_eq!(surface.poll_frame(later), Some(frame));
    }
}
