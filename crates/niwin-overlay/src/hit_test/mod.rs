//! Cursor hit testing against the overlay's interactive zones.

mod monitor;
mod zones;

pub use monitor::PassThroughMonitor;
pub use zones::{should_ignore, Edge, HitRegion, HitZones};
