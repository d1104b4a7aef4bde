//! Narrow request/response boundary between the UI and the host window.
//!
//! The UI never touches the window directly. It sends a [`HostRequest`]
//! through a [`HostBridge`] and the host answers with a [`HostResponse`]
//! produced by [`handle_request`].

mod bridge;
mod messages;
mod service;

pub use bridge::{channel, ChannelBridge, HostBridge, HostEndpoint, PendingCall};
pub use messages::{BoundsRequest, HostRequest, HostResponse};
pub use service::handle_request;
