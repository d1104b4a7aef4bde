//! Graceful shutdown: end the gesture, release the window, stop the runtime.

use std::time::{Duration, Instant};

use super::core::NiwinApp;

/// Upper bound on waiting for the UI client's unmount request.
const UNMOUNT_TIMEOUT: Duration = Duration::from_millis(250);

// =============================================================================
// SHUTDOWN
// =============================================================================

impl NiwinApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Tear down any resize gesture (no further bounds calls)
    /// 2. Unmount the UI client while the host can still answer it
    /// 3. Detach the window from the host (stops the pass-through monitor)
    /// 4. Shut down the tokio runtime (cancels in-flight host calls)
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.resize.teardown(&mut self.surface);
        self.surface.detach_runtime();
        self.unmount_client();

        self.host.window_destroyed();
        self.window = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(1));
        }

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }

    /// Run the client's unmount request to completion. The host answers on
    /// this thread, so the queue is served here until the task finishes.
    fn unmount_client(&mut self) {
        let Some(ref rt) = self.tokio_runtime else {
            return;
        };
        if self.client.is_disposed() {
            return;
        }
        let client = self.client.clone();
        let task = rt.spawn(async move { client.unmount().await });

        let deadline = Instant::now() + UNMOUNT_TIMEOUT;
        loop {
            self.endpoint.serve_pending(&mut self.host);
            if task.is_finished() {
                break;
            }
            if Instant::now() >= deadline {
                tracing::warn!("UI client unmount timed out");
                break;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
