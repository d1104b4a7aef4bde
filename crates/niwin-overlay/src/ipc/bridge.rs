//! UI-side handle to the host, and the host-side queue that serves it.
//!
//! [`ChannelBridge`] is cheap to clone and can be used from any tokio task.
//! Calls queue up on the [`HostEndpoint`], which the host event loop drains
//! without blocking.

use async_trait::async_trait;
use niwin_common::{HostError, WindowBounds};
use tokio::sync::{mpsc, oneshot};
use tracing::trace;

use crate::host::{OverlayHandle, OverlayHost};

use super::messages::{BoundsRequest, HostRequest, HostResponse};
use super::service::handle_request;

// =============================================================================
// BRIDGE TRAIT
// =============================================================================

/// Asynchronous access to the host window.
///
/// Only [`call`](Self::call) is required; the typed helpers map responses
/// and report a mismatched one as [`HostError::Rejected`].
#[async_trait]
pub trait HostBridge: Send + Sync {
    async fn call(&self, request: HostRequest) -> Result<HostResponse, HostError>;

    async fn set_ignore_mouse_events(&self, ignore: bool) -> Result<(), HostError> {
        match self.call(HostRequest::SetIgnoreMouseEvents { ignore }).await? {
            HostResponse::Ack => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    async fn get_window_bounds(&self) -> Result<Option<WindowBounds>, HostError> {
        match self.call(HostRequest::GetWindowBounds).await? {
            HostResponse::Bounds(bounds) => Ok(bounds),
            other => Err(unexpected(other)),
        }
    }

    async fn set_window_bounds(
        &self,
        request: BoundsRequest,
    ) -> Result<Option<WindowBounds>, HostError> {
        match self.call(HostRequest::SetWindowBounds(request)).await? {
            HostResponse::Bounds(bounds) => Ok(bounds),
            other => Err(unexpected(other)),
        }
    }

    async fn close_window(&self) -> Result<(), HostError> {
        match self.call(HostRequest::CloseWindow).await? {
            HostResponse::Ack => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    async fn get_pass_through_enabled(&self) -> Result<bool, HostError> {
        match self.call(HostRequest::GetPassThroughEnabled).await? {
            HostResponse::PassThroughEnabled(enabled) => Ok(enabled),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(response: HostResponse) -> HostError {
    HostError::Rejected(format!("unexpected response: {response:?}"))
}

// =============================================================================
// CHANNEL TRANSPORT
// =============================================================================

/// A request waiting for the host, with the slot for its answer.
#[derive(Debug)]
pub struct PendingCall {
    pub request: HostRequest,
    reply: oneshot::Sender<HostResponse>,
}

impl PendingCall {
    /// Answer the caller. A caller that gave up is not an error.
    pub fn respond(self, response: HostResponse) {
        let _ = self.reply.send(response);
    }
}

/// Create a connected bridge/endpoint pair.
pub fn channel() -> (ChannelBridge, HostEndpoint) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelBridge { tx }, HostEndpoint { rx })
}

/// UI side of an in-process host connection.
#[derive(Debug, Clone)]
pub struct ChannelBridge {
    tx: mpsc::UnboundedSender<PendingCall>,
}

#[async_trait]
impl HostBridge for ChannelBridge {
    async fn call(&self, request: HostRequest) -> Result<HostResponse, HostError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(PendingCall { request, reply })
            .map_err(|_| HostError::Disconnected)?;
        rx.await.map_err(|_| HostError::Disconnected)
    }
}

/// Host side of an in-process connection.
#[derive(Debug)]
pub struct HostEndpoint {
    rx: mpsc::UnboundedReceiver<PendingCall>,
}

impl HostEndpoint {
    /// Next queued call, without waiting.
    pub fn try_next(&mut self) -> Option<PendingCall> {
        self.rx.try_recv().ok()
    }

    /// Answer every queued call against `host`. Returns how many were served.
    pub fn serve_pending<W: OverlayHandle>(&mut self, host: &mut OverlayHost<W>) -> usize {
        let mut served = 0;
        while let Some(call) = self.try_next() {
            trace!(kind = call.request.kind(), "serving host request");
            let response = handle_request(host, call.request.clone());
            call.respond(response);
            served += 1;
        }
        served
    }
}
