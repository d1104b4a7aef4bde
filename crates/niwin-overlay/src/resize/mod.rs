//! Drag-to-resize gesture handling on the UI side.
//!
//! A gesture anchors the window's left edge and bottom edge, then turns
//! each pointer position into new bounds. Bounds updates are coalesced
//! into a single-slot mailbox and flushed at most once per frame.

mod controller;
mod frame;
mod mailbox;
mod session;


pub use controller::{ResizeController, ResizeHost, PRIMARY_BUTTON};
pub use frame::{FrameHandle, IntervalFrameClock};
pub use mailbox::PendingResize;
pub use session::{Anchor, BoundsFetch, GestureState, GestureToken, ResizeLimits, ResizeSession};
