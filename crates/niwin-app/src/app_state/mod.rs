//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the overlay host, the host request queue, and the
//! UI-side resize controller.

mod core;
mod cursor;
mod event_handler;
mod init;
mod polling;
mod resize_drag;
mod shutdown;
mod types;
mod window_handle;

pub use core::NiwinApp;
