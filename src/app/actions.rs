//! Side effects requested by the event handler.
//!
//! The handler itself is pure: anything that needs the Zellij host is returned
//! as an [`Action`] and executed by the plugin shim in `main.rs`, in order.

use crate::api::Endpoint;

/// Commands executed by the plugin runtime after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit (e.g., pressing 'q').
    CloseFocus,

    /// Issues a web request for the endpoint.
    ///
    /// The response comes back as a `WebRequestResult` event whose context
    /// identifies the endpoint again, see [`Endpoint::to_context`].
    Fetch(Endpoint),
}
