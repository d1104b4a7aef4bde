//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, WindowId};

use niwin_overlay::{CursorSource, HitRegion, HitZones, HostBridge, ResizeHost};

use super::core::NiwinApp;
use super::resize_drag::{button_index, in_resize_handle, pointer_id};

impl ApplicationHandler for NiwinApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Destroyed => {
                self.host.window_destroyed();
                self.window = None;
            }

            WindowEvent::CursorMoved {
                device_id,
                position,
            } => {
                self.handle_cursor_moved(device_id, position.x, position.y);
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.cursor.set_scale_factor(scale_factor);
            }

            WindowEvent::Focused(false) => {
                if let Some(pointer) = self.surface.captured() {
                    self.resize
                        .on_lost_pointer_capture(&mut self.surface, pointer);
                }
            }

            WindowEvent::MouseInput {
                device_id,
                state,
                button,
            } => {
                self.handle_mouse_input(device_id, state, button);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl NiwinApp {
    /// Feed gesture moves in screen space, track menu hover, and update
    /// the handle cursor.
    fn handle_cursor_moved(&mut self, device_id: DeviceId, x: f64, y: f64) {
        self.cursor_pos = (x, y);
        let pointer = pointer_id(device_id);

        if self.surface.has_pointer_capture(pointer) {
            if let Some(point) = self.cursor.cursor_position() {
                self.resize
                    .on_pointer_move(&mut self.surface, pointer, point.x, point.y);
            }
            return;
        }

        if self.set_menu_hovered(self.cursor_over_menu()) {
            self.focus_menu();
        }

        let icon = if self.over_resize_handle() {
            CursorIcon::NeResize
        } else {
            CursorIcon::Default
        };
        if let Some(ref w) = self.window {
            w.set_cursor(icon);
        }
    }

    /// Start a resize gesture on press over the handle; end it on release.
    fn handle_mouse_input(&mut self, device_id: DeviceId, state: ElementState, button: MouseButton) {
        let pointer = pointer_id(device_id);
        match state {
            ElementState::Pressed => {
                if self.over_resize_handle() {
                    self.resize
                        .on_pointer_down(&mut self.surface, pointer, button_index(button));
                }
            }
            ElementState::Released => {
                self.resize.on_pointer_up(&mut self.surface, pointer);
            }
        }
    }

    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match event.logical_key {
            Key::Named(NamedKey::Escape) => self.request_close(),
            Key::Character(ref c) if c.eq_ignore_ascii_case("m") => self.toggle_menu(),
            _ => {}
        }
    }

    fn over_resize_handle(&self) -> bool {
        let Some(ref window) = self.window else {
            return false;
        };
        let (x, y) = self.cursor_pos;
        in_resize_handle(
            x,
            y,
            window.inner_size().width,
            self.config.resize.handle_size,
            window.scale_factor(),
        )
    }

    fn cursor_over_menu(&self) -> bool {
        let (Some(bounds), Some(point)) = (self.host.window_bounds(), self.cursor.cursor_position())
        else {
            return false;
        };
        HitZones::compute(&bounds, &self.config.hit_zones).classify(point) == HitRegion::Menu
    }

    /// Record menu hover. Returns `true` when the cursor just entered.
    pub(super) fn set_menu_hovered(&mut self, over: bool) -> bool {
        let entered = over && !self.menu_hovered;
        self.menu_hovered = over;
        entered
    }

    /// Close through the host boundary, the same path the UI uses.
    fn request_close(&mut self) {
        let Some(ref rt) = self.tokio_runtime else {
            self.host.request_close();
            return;
        };
        let bridge = self.bridge.clone();
        rt.spawn(async move {
            if let Err(e) = bridge.close_window().await {
                tracing::warn!(error = %e, "Close request failed");
            }
        });
    }
}
