//! Application Layer
//!
//! The session controller and its collaborator seams.

pub mod controller;

// Re-exports
pub use controller::{LoginOutcome, SessionController, SessionEventSink, TOKEN_KEY, USER_KEY};
