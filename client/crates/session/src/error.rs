//! Gateway Error Types

use thiserror::Error;

/// Errors from the auth gateway.
///
/// `Rejected` carries the backend's human-readable message; it is surfaced
/// verbatim in the session snapshot for the login form to render.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The backend refused the request (bad credentials, revoked token, ...)
    #[error("{0}")]
    Rejected(String),

    /// The request never completed (DNS, TLS, timeout, ...)
    #[error("network error: {0}")]
    Transport(String),
}
