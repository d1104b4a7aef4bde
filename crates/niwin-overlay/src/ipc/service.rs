//! Host-side dispatch of UI requests.

use tracing::debug;

use crate::host::{OverlayHandle, OverlayHost};

use super::messages::{HostRequest, HostResponse};

/// Execute one request against the overlay host.
///
/// A UI request to ignore mouse events is downgraded to capture when
/// pass-through is disabled, so the window can never become unclickable.
pub fn handle_request<W: OverlayHandle>(
    host: &mut OverlayHost<W>,
    request: HostRequest,
) -> HostResponse {
    debug!(kind = request.kind(), "host request");
    match request {
        HostRequest::SetIgnoreMouseEvents { ignore } => {
            let ignore = ignore && host.pass_through_enabled();
            host.update_ignore_state(ignore);
            HostResponse::Ack
        }
        HostRequest::GetWindowBounds => HostResponse::Bounds(host.window_bounds()),
        HostRequest::SetWindowBounds(request) => {
            HostResponse::Bounds(host.set_window_bounds(&request))
        }
        HostRequest::CloseWindow => {
            host.request_close();
            HostResponse::Ack
        }
        HostRequest::GetPassThroughEnabled => {
            HostResponse::PassThroughEnabled(host.pass_through_enabled())
        }
    }
}
