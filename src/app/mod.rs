//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin shim (main.rs) and the domain, api and
//! ui layers. It implements the event-driven architecture that powers the
//! interactive UI.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Timer expiries, Web responses ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Quiet-period commit of the search text
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and route types
//! - [`pagination`]: Page counter, results and the single in-flight fetch
//! - [`recorder`]: Search-count read-then-write recording
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod recorder;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Route};
pub use state::AppState;
