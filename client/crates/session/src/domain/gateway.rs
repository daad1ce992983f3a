//! Auth Gateway Trait
//!
//! The remote authentication backend, seen from the client. Implementation
//! is in the infrastructure layer; tests substitute their own doubles.

use serde::Deserialize;

use crate::domain::entity::user::User;
use crate::domain::value_object::{auth_token::AuthToken, credentials::Credentials};
use crate::error::GatewayError;

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginGrant {
    pub user: User,
    pub token: AuthToken,
}

/// Remote authentication service.
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// Exchange credentials for a user and bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, GatewayError>;

    /// Invalidate the session server-side. Idempotent; safe to call with an
    /// already-invalid or absent token.
    async fn logout(&self, token: Option<&AuthToken>) -> Result<(), GatewayError>;
}
