//! Client session state, driven by auth-state events.
//!
//! Mirrors what a browser client does: an asynchronous credential restore
//! publishes auth-state events, a process-wide store holds the current
//! identity + derived role + readiness flag, and consumers subscribe to
//! changes.

pub mod events;
pub mod state;
pub mod store;

pub use events::{AuthEvent, AuthEventBus, SeqEvent};
pub use state::{Identity, SessionState};
pub use store::SessionStore;
