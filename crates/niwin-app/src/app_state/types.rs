//! Internal types and constants for the app state module.

use std::time::Duration;

use niwin_common::{HostError, WindowBounds};
use niwin_overlay::BoundsFetch;

/// Results of async UI work, delivered back to the event loop.
#[derive(Debug)]
pub(super) enum UiEvent {
    /// A resize gesture's start-of-gesture bounds fetch completed.
    BoundsResolved {
        fetch: BoundsFetch,
        result: Result<Option<WindowBounds>, HostError>,
    },
    /// The menu was toggled through the pass-through client.
    MenuToggled { open: bool },
}

/// How often the event loop wakes (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);
