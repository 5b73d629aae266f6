//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain/api layers:
//!
//! ```text
//! Key / WebRequestResult → Event → handle_event → AppState → Actions → web_request / hide_self
//!                                                     ↓
//!                                             compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Screen, input mode, and permission state types
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Permission, Screen, SearchFocus};
pub use state::{AppState, CountryDetails, Remote};
