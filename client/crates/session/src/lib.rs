//! Session Core
//!
//! The client-resident authentication subsystem of the portal:
//! - `store` - the session state machine and its read snapshot
//! - `application` - the controller driving bootstrap/login/logout
//! - `guard` - the pure role-based access check for protected views
//! - `domain` - entities, value objects, and the auth gateway trait
//! - `infra` - HTTP implementation of the gateway
//!
//! ## Design
//! - The state machine is a tagged phase type: `Authenticated` carries its
//!   user and token, so the "authenticated iff user and token present"
//!   invariant holds by construction.
//! - Cached credentials are trusted at bootstrap without a network
//!   round-trip. The first API call to present the token bears
//!   responsibility for rejecting a stale or revoked one; transport code
//!   should route that rejection to `SessionController::invalidate`.
//! - Sign-in attempts carry a monotonic attempt number; only the current
//!   attempt may settle the machine, so a logout can never be undone by a
//!   slow login response.

pub mod application;
pub mod domain;
pub mod error;
pub mod guard;
pub mod infra;
pub mod store;

// Re-exports for convenience
pub use application::controller::{LoginOutcome, SessionController, SessionEventSink};
pub use domain::entity::user::User;
pub use domain::gateway::{AuthGateway, LoginGrant};
pub use domain::value_object::{
    auth_token::AuthToken, credentials::Credentials, role::Role, user_id::UserId,
};
pub use error::GatewayError;
pub use guard::{AccessDecision, DenyReason, authorize};
pub use infra::http::HttpAuthGateway;
pub use store::{SessionSnapshot, SessionStore};
