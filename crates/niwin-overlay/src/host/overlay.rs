//! Overlay lifecycle and pass-through state.
//!
//! [`OverlayHost`] owns the window handle from creation to destruction,
//! along with the hit-test timer and the last click-through state that
//! was pushed to the OS. The host event loop drives it; nothing here
//! blocks or spawns.

use std::time::{Duration, Instant};

use niwin_common::WindowBounds;
use niwin_config::schema::{HitZoneConfig, NiwinConfig};
use tracing::{debug, info, warn};

use crate::hit_test::{HitZones, PassThroughMonitor};
use crate::ipc::BoundsRequest;

use super::{CursorSource, OverlayHandle};

/// Host-side owner of the overlay window.
///
/// Lifecycle: `NoWindow -> Created -> Destroyed`. While created the window
/// is either capturing input or passing clicks through, and the state
/// only changes through [`update_ignore_state`](Self::update_ignore_state).
pub struct OverlayHost<W: OverlayHandle> {
    window: Option<W>,
    /// Last value applied to the OS; `None` until the first toggle.
    last_ignore: Option<bool>,
    monitor: PassThroughMonitor,
    zones: HitZoneConfig,
    pass_through_enabled: bool,
    /// Set while a UI gesture owns the pointer; forces capture.
    capture_held: bool,
}

impl<W: OverlayHandle> OverlayHost<W> {
    pub fn new(config: &NiwinConfig) -> Self {
        Self {
            window: None,
            last_ignore: None,
            monitor: PassThroughMonitor::new(Duration::from_millis(
                config.pass_through.poll_interval_ms,
            )),
            zones: config.hit_zones.clone(),
            pass_through_enabled: config.pass_through.enabled,
            capture_held: false,
        }
    }

    pub fn pass_through_enabled(&self) -> bool {
        self.pass_through_enabled
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> Option<&mut W> {
        self.window.as_mut()
    }

    pub fn last_ignore_state(&self) -> Option<bool> {
        self.last_ignore
    }

    pub fn capture_held(&self) -> bool {
        self.capture_held
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_running()
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.monitor.next_deadline()
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Take ownership of a freshly created window.
    ///
    /// With pass-through disabled the window is pinned to capturing input
    /// and the monitor never runs.
    pub fn window_created(&mut self, window: W, cursor: &dyn CursorSource, now: Instant) {
        if self.window.is_some() {
            warn!("overlay window replaced without a destroy notification");
            self.window_destroyed();
        }
        self.window = Some(window);
        info!(
            pass_through = self.pass_through_enabled,
            "overlay window attached"
        );

        if self.pass_through_enabled {
            self.start_pass_through_monitor(cursor, now);
        } else {
            self.update_ignore_state(false);
        }
    }

    /// Release the window. Stops the monitor first so no tick can act on
    /// a stale handle, then forgets the applied state.
    pub fn window_destroyed(&mut self) -> Option<W> {
        self.stop_pass_through_monitor();
        self.last_ignore = None;
        self.capture_held = false;
        let window = self.window.take();
        if window.is_some() {
            info!("overlay window detached");
        }
        window
    }

    // =========================================================================
    // MONITOR
    // =========================================================================

    /// Evaluate once immediately, then arm the periodic timer.
    ///
    /// No-op when already running, disabled by configuration, or windowless.
    pub fn start_pass_through_monitor(&mut self, cursor: &dyn CursorSource, now: Instant) {
        if self.monitor.is_running() || !self.pass_through_enabled || self.window.is_none() {
            return;
        }
        self.evaluate_cursor_position(cursor);
        self.monitor.start(now);
        debug!(
            interval_ms = self.monitor.interval().as_millis() as u64,
            "pass-through monitor started"
        );
    }

    pub fn stop_pass_through_monitor(&mut self) {
        if self.monitor.is_running() {
            debug!("pass-through monitor stopped");
        }
        self.monitor.stop();
    }

    /// Run the hit test if a monitor tick is due.
    pub fn tick(&mut self, cursor: &dyn CursorSource, now: Instant) {
        if self.window.is_none() {
            return;
        }
        if self.monitor.poll_due(now) {
            self.evaluate_cursor_position(cursor);
        }
    }

    /// Keep the window capturing while a gesture runs, even with the cursor
    /// outside every zone. Releasing lets the next tick re-evaluate.
    pub fn set_capture_hold(&mut self, held: bool) {
        if self.capture_held == held {
            return;
        }
        self.capture_held = held;
        debug!(held, "capture hold changed");
        if held {
            self.update_ignore_state(false);
        }
    }

    /// Classify the global cursor against zones derived from the live bounds.
    pub fn evaluate_cursor_position(&mut self, cursor: &dyn CursorSource) {
        if self.capture_held {
            self.update_ignore_state(false);
            return;
        }
        let Some(bounds) = self.window.as_ref().and_then(|w| w.bounds()) else {
            return;
        };
        let Some(point) = cursor.cursor_position() else {
            return;
        };
        let region = HitZones::compute(&bounds, &self.zones).classify(point);
        self.update_ignore_state(!region.captures_input());
    }

    /// Push a click-through state to the OS, but only on a real change.
    ///
    /// Returns whether the OS toggle was issued.
    pub fn update_ignore_state(&mut self, should_ignore: bool) -> bool {
        let Some(window) = self.window.as_mut() else {
            return false;
        };
        if self.last_ignore == Some(should_ignore) {
            return false;
        }
        if let Err(e) = window.set_ignore_mouse_events(should_ignore, should_ignore) {
            warn!(error = %e, should_ignore, "failed to toggle click-through");
        }
        // Recorded even on failure so an unsupported platform is not retried every tick.
        self.last_ignore = Some(should_ignore);
        debug!(
            state = if should_ignore { "passing-through" } else { "capturing" },
            "pass-through state changed"
        );
        true
    }

    // =========================================================================
    // BOUNDS
    // =========================================================================

    pub fn window_bounds(&self) -> Option<WindowBounds> {
        self.window.as_ref().and_then(|w| w.bounds())
    }

    /// Apply a bounds request, returning what the window reports afterwards.
    pub fn set_window_bounds(&mut self, request: &BoundsRequest) -> Option<WindowBounds> {
        let window = self.window.as_mut()?;
        let current = window.bounds()?;
        let target = request.resolve(&current);
        if let Err(e) = window.set_bounds(target) {
            warn!(error = %e, ?target, "failed to set window bounds");
            return None;
        }
        window.bounds()
    }

    pub fn request_close(&mut self) {
        if let Some(window) = self.window.as_mut() {
            window.close();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
