//! UI-side pass-through requests tied to the view lifecycle.
//!
//! The host monitor decides pass-through from geometry alone. The view
//! adds a few explicit requests on top: capture while the menu is open or
//! focused, and capture on mount when pass-through is off. Failures are
//! logged and dropped; the view never waits on them for correctness.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::ipc::HostBridge;

pub struct PassThroughClient<B: HostBridge> {
    bridge: Arc<B>,
    disposed: AtomicBool,
    menu_open: AtomicBool,
}

impl<B: HostBridge> PassThroughClient<B> {
    pub fn new(bridge: Arc<B>) -> Self {
        Self {
            bridge,
            disposed: AtomicBool::new(false),
            menu_open: AtomicBool::new(false),
        }
    }

    pub fn bridge(&self) -> &Arc<B> {
        &self.bridge
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open.load(Ordering::Acquire)
    }

    /// Query the host flag and pin the window to capture if pass-through
    /// is off or the query fails. A result arriving after
    /// [`unmount`](Self::unmount) is ignored.
    pub async fn mount(&self) {
        let enabled = self.bridge.get_pass_through_enabled().await;
        if self.is_disposed() {
            return;
        }
        match enabled {
            Ok(true) => {}
            Ok(false) => self.request(false).await,
            Err(e) => {
                debug!(error = %e, "pass-through query failed, forcing capture");
                self.request(false).await;
            }
        }
    }

    /// Flip the menu and return the new open state. An open menu captures.
    pub async fn toggle_menu(&self) -> bool {
        let open = !self.menu_open.fetch_xor(true, Ordering::AcqRel);
        self.menu_toggled(open).await;
        open
    }

    pub async fn menu_toggled(&self, open: bool) {
        self.menu_open.store(open, Ordering::Release);
        self.request(!open).await;
    }

    /// Hover or keyboard focus on the menu button.
    pub async fn menu_focused(&self) {
        self.request(false).await;
    }

    /// Leave the window capturing and stop reacting to late results.
    pub async fn unmount(&self) {
        self.disposed.store(true, Ordering::Release);
        self.request(false).await;
    }

    async fn request(&self, ignore: bool) {
        if let Err(e) = self.bridge.set_ignore_mouse_events(ignore).await {
            debug!(error = %e, ignore, "set-ignore request failed");
        }
    }
}
