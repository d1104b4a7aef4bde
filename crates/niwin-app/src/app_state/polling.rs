//! Per-wake work: hit-test ticks, host requests, UI results, frames.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use niwin_common::CursorPoint;
use niwin_overlay::CursorSource;

use super::core::NiwinApp;
use super::types::{UiEvent, POLL_INTERVAL};

impl NiwinApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        self.endpoint.serve_pending(&mut self.host);
        self.poll_ui_events();
        self.track_gesture(self.cursor.cursor_position(), self.cursor.primary_pressed());
        self.host.set_capture_hold(self.surface.captured().is_some());
        self.host.tick(&self.cursor, now);
        self.poll_resize_frame(now);

        if self.host.window().is_some_and(|w| w.close_requested()) {
            tracing::info!("Window close requested by UI");
            self.shutdown();
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Drain results of async UI work (non-blocking).
    pub(super) fn poll_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::BoundsResolved { fetch, result } => {
                    self.resize
                        .on_bounds_resolved(&mut self.surface, fetch, result);
                }
                UiEvent::MenuToggled { open } => {
                    tracing::debug!(open, "Menu toggled");
                }
            }
        }
    }

    /// Follow the captured pointer through the global cursor.
    ///
    /// Window events stop once the pointer leaves the window, so the
    /// gesture is driven from here and ends when the button is seen up.
    pub(super) fn track_gesture(&mut self, cursor: Option<CursorPoint>, primary_down: Option<bool>) {
        let Some(pointer) = self.surface.captured() else {
            return;
        };
        if primary_down == Some(false) {
            self.resize.on_pointer_up(&mut self.surface, pointer);
            return;
        }
        if let Some(point) = cursor {
            self.resize
                .on_pointer_move(&mut self.surface, pointer, point.x, point.y);
        }
    }

    fn poll_resize_frame(&mut self, now: Instant) {
        if let Some(frame) = self.surface.poll_frame(now) {
            self.resize.on_frame(&mut self.surface, frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use niwin_common::{CursorPoint, PointerId, WindowBounds};
    use niwin_config::schema::NiwinConfig;
    use niwin_overlay::{GestureState, ResizeHost};

    use crate::app_state::core::NiwinApp;

    /// App with a UI runtime and a ready gesture anchored on `{50,50,300,200}`.
    fn dragging() -> NiwinApp {
        let mut app = NiwinApp::new(NiwinConfig::default());
        app.start_ui_runtime();
        let fetch = app
            .resize
            .on_pointer_down(&mut app.surface, PointerId(1), 0)
            .unwrap();
        app.resize.on_bounds_resolved(
            &mut app.surface,
            fetch,
            Ok(Some(WindowBounds::new(50, 50, 300, 200))),
        );
        app
    }

    #[test]
    fn gesture_follows_cursor_outside_window() {
        let mut app = dragging();

        app.track_gesture(Some(CursorPoint::new(360, 40)), Some(true));
        app.track_gesture(Some(CursorPoint::new(700, 10)), Some(true));

        assert_eq!(app.resize.state(), GestureState::Ready);
        assert_eq!(
            app.resize.pending(),
            Some(&WindowBounds::new(50, 10, 650, 240))
        );
        app.shutdown();
    }

    #[test]
    fn button_up_ends_gesture() {
        let mut app = dragging();
        app.track_gesture(Some(CursorPoint::new(700, 10)), Some(true));

        app.track_gesture(Some(CursorPoint::new(700, 10)), Some(false));

        assert_eq!(app.resize.state(), GestureState::Idle);
        assert!(app.resize.pending().is_none());
        assert!(!app.surface.has_pointer_capture(PointerId(1)));
        app.shutdown();
    }

    #[test]
    fn unknown_button_state_keeps_gesture() {
        let mut app = dragging();
        app.track_gesture(None, None);
        assert_eq!(app.resize.state(), GestureState::Ready);
        app.shutdown();
    }

    #[test]
    fn capture_is_held_while_dragging() {
        let mut app = dragging();
        app.host.set_capture_hold(app.surface.captured().is_some());
        assert!(app.host.capture_held());

        app.track_gesture(None, Some(false));
        app.host.set_capture_hold(app.surface.captured().is_some());
        assert!(!app.host.capture_held());
        app.shutdown();
    }

    #[test]
    fn no_gesture_is_noop() {
        let mut app = NiwinApp::new(NiwinConfig::default());
        app.track_gesture(Some(CursorPoint::new(10, 10)), Some(false));
        assert_eq!(app.resize.state(), GestureState::Idle);
    }
}
