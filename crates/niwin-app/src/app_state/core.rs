//! NiwinApp struct definition and constructor.

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use winit::window::Window;

use niwin_config::schema::NiwinConfig;
use niwin_overlay::ipc::channel;
use niwin_overlay::{
    ChannelBridge, HostEndpoint, OverlayHost, PassThroughClient, ResizeController, ResizeLimits,
};

use super::cursor::DeviceCursor;
use super::resize_drag::UiSurface;
use super::types::UiEvent;
use super::window_handle::WinitOverlay;

/// Top-level application state.
pub struct NiwinApp {
    pub(super) config: NiwinConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) cursor: DeviceCursor,
    /// Last cursor position inside the window, in physical pixels.
    pub(super) cursor_pos: (f64, f64),
    pub(super) menu_hovered: bool,

    // Host side: window lifecycle, pass-through, request queue
    pub(super) host: OverlayHost<WinitOverlay>,
    pub(super) endpoint: HostEndpoint,

    // UI side: everything below talks to the host through `bridge`
    pub(super) bridge: ChannelBridge,
    pub(super) client: Arc<PassThroughClient<ChannelBridge>>,
    pub(super) surface: UiSurface,
    pub(super) resize: ResizeController,
    pub(super) ui_rx: Receiver<UiEvent>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl NiwinApp {
    pub fn new(config: NiwinConfig) -> Self {
        let (bridge, endpoint) = channel();
        let (ui_tx, ui_rx) = std::sync::mpsc::channel();
        let surface = UiSurface::new(
            bridge.clone(),
            ui_tx,
            Duration::from_millis(config.resize.frame_interval_ms),
        );
        Self {
            host: OverlayHost::new(&config),
            endpoint,
            client: Arc::new(PassThroughClient::new(Arc::new(bridge.clone()))),
            bridge,
            surface,
            resize: ResizeController::new(ResizeLimits::from_config(&config.resize)),
            ui_rx,
            tokio_runtime: None,
            window: None,
            cursor: DeviceCursor::default(),
            cursor_pos: (0.0, 0.0),
            menu_hovered: false,
            should_exit: false,
            config,
        }
    }
}
