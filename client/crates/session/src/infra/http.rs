//! HTTP Auth Gateway
//!
//! Implements the gateway trait against the portal backend's REST API:
//! `POST {base}/user/login` and `POST {base}/user/logout`. Error bodies
//! carry a `message` field which becomes the user-facing failure text.

use serde::Deserialize;

use crate::domain::gateway::{AuthGateway, LoginGrant};
use crate::domain::value_object::{auth_token::AuthToken, credentials::Credentials};
use crate::error::GatewayError;

/// Fallback when the backend returns an error without a usable message.
const LOGIN_FALLBACK_MESSAGE: &str = "Login failed";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Auth gateway over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAuthGateway {
    /// `base_url` without a trailing slash, e.g. `https://portal.example/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn rejection(response: reqwest::Response) -> GatewayError {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_string());
        GatewayError::Rejected(message)
    }
}

impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, GatewayError> {
        let response = self
            .client
            .post(format!("{}/user/login", self.base_url))
            .json(credentials)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<LoginGrant>()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }

    async fn logout(&self, token: Option<&AuthToken>) -> Result<(), GatewayError> {
        let mut request = self.client.post(format!("{}/user/logout", self.base_url));
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}
