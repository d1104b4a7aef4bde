//! Click-through hit testing and drag-resize for the niwin overlay window.
//!
//! The host side owns the window: [`OverlayHost`] polls the global cursor
//! and flips the window between capturing input and letting clicks fall
//! through. The UI side drives [`ResizeController`] from pointer events and
//! talks to the host only through the [`ipc`] request/response boundary.

pub mod client;
pub mod hit_test;
pub mod host;
pub mod ipc;
pub mod resize;

#[cfg(test)]
pub(crate) mod testing;

pub use client::PassThroughClient;
pub use hit_test::{HitRegion, HitZones, PassThroughMonitor};
pub use host::{CursorSource, OverlayHandle, OverlayHost};
pub use ipc::{BoundsRequest, ChannelBridge, HostBridge, HostEndpoint, HostRequest, HostResponse};
pub use resize::{
    BoundsFetch, FrameHandle, GestureState, GestureToken, IntervalFrameClock, ResizeController,
    ResizeHost, ResizeLimits,
};
