//! Window creation and UI runtime startup.

use std::sync::Arc;
use std::time::Instant;

use winit::event_loop::ActiveEventLoop;
use winit::window::{WindowAttributes, WindowLevel};

use niwin_config::schema::WindowConfig;

use super::core::NiwinApp;
use super::types::UiEvent;
use super::window_handle::WinitOverlay;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl NiwinApp {
    /// Create the overlay window and hand it to the host.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window = match event_loop.create_window(window_attributes(&self.config.window)) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.cursor.connect();
        self.cursor.set_scale_factor(window.scale_factor());
        self.host.window_created(
            WinitOverlay::new(window.clone()),
            &self.cursor,
            Instant::now(),
        );
        self.window = Some(window);
        tracing::info!("Overlay window created");

        self.start_ui_runtime();
        true
    }

    /// Start the tokio runtime that carries UI-side host calls, then mount
    /// the pass-through client.
    pub(super) fn start_ui_runtime(&mut self) {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build();

        match rt {
            Ok(rt) => {
                let client = self.client.clone();
                rt.spawn(async move { client.mount().await });
                self.surface.attach_runtime(rt.handle().clone());
                self.tokio_runtime = Some(rt);
                tracing::info!("UI runtime started");
            }
            Err(e) => {
                tracing::warn!("Failed to start tokio runtime, resize disabled: {e}");
            }
        }
    }

    /// Toggle the menu through the pass-through client.
    pub(super) fn toggle_menu(&self) {
        let Some(ref rt) = self.tokio_runtime else {
            return;
        };
        let client = self.client.clone();
        let events = self.surface.events();
        rt.spawn(async move {
            let open = client.toggle_menu().await;
            let _ = events.send(UiEvent::MenuToggled { open });
        });
    }

    /// Hover over the menu button keeps the window capturing.
    pub(super) fn focus_menu(&self) {
        let Some(ref rt) = self.tokio_runtime else {
            return;
        };
        let client = self.client.clone();
        rt.spawn(async move { client.menu_focused().await });
    }
}

/// Window attributes for the overlay.
pub(super) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let level = if config.always_on_top {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    };
    WindowAttributes::default()
        .with_title(config.title.clone())
        .with_transparent(config.transparent)
        .with_decorations(config.decorations)
        .with_window_level(level)
        .with_inner_size(winit::dpi::LogicalSize::new(
            f64::from(config.width),
            f64::from(config.height),
        ))
}
