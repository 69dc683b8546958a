//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or host events.
//! Actions bridge pure state transformations and effectful operations like
//! arming timers, sending web requests, or hiding the plugin pane.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The plugin shim executes
//! these actions in order, which keeps every state transition testable
//! without a running host.
//!
//! # Example
//!
//! ```rust
//! use reelscout::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::StartTimer(Duration::from_millis(1000))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::api::context::OutboundRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Arms a one-shot host timer.
    ///
    /// Its expiry arrives back as a debounce timer event. Every timer is armed
    /// with the same quiet period.
    StartTimer(Duration),

    /// Sends a web request through the host.
    ///
    /// The request context is echoed back with the response and routes it to
    /// the controller that issued it.
    Request(OutboundRequest),
}
