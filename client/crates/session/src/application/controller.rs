//! Session Controller
//!
//! Orchestrates bootstrap, login, logout, and profile updates against the
//! auth gateway and the persistent store, driving session store transitions.
//! Constructed once at process start and passed to callers by reference;
//! it is the sole writer of the session store and of the `token`/`user`
//! cache keys.
//!
//! Failure policy (the load-bearing contract of this subsystem):
//! - `login` never returns an error; callers get a [`LoginOutcome`] value.
//! - remote `logout` failures are logged and swallowed; local teardown runs
//!   unconditionally, so a network error can never leave a user stuck
//!   signed in.
//! - cache write failures are logged and do not fail the operation; the
//!   in-memory session is authoritative for the rest of the process.

use std::sync::Arc;

use platform::kv::KeyValueStore;
use platform::toast::ToastSink;

use crate::domain::entity::user::User;
use crate::domain::gateway::AuthGateway;
use crate::domain::value_object::{auth_token::AuthToken, credentials::Credentials};
use crate::store::SessionStore;

/// Persistent store key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Persistent store key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// Result value of a login call. Never an `Err`: gateway failures are folded
/// into `Failed` so the login form renders a message instead of unwinding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failed { message: String },
}

impl LoginOutcome {
    fn failed(message: impl Into<String>) -> Self {
        LoginOutcome::Failed {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoginOutcome::Success => None,
            LoginOutcome::Failed { message } => Some(message),
        }
    }
}

/// Observer notified whenever the local session is torn down (logout or
/// backend invalidation). The notification store registers one so a later
/// user on the same process never sees the previous user's data.
pub trait SessionEventSink: Send + Sync {
    fn session_ended(&self);
}

/// Session controller
pub struct SessionController<G, K, T>
where
    G: AuthGateway + Sync,
    K: KeyValueStore,
    T: ToastSink,
{
    store: Arc<SessionStore>,
    gateway: Arc<G>,
    cache: Arc<K>,
    toasts: Arc<T>,
    sinks: Vec<Arc<dyn SessionEventSink>>,
}

impl<G, K, T> SessionController<G, K, T>
where
    G: AuthGateway + Sync,
    K: KeyValueStore,
    T: ToastSink,
{
    pub fn new(store: Arc<SessionStore>, gateway: Arc<G>, cache: Arc<K>, toasts: Arc<T>) -> Self {
        Self {
            store,
            gateway,
            cache,
            toasts,
            sinks: Vec::new(),
        }
    }

    /// Register a session-end observer.
    pub fn with_event_sink(mut self, sink: Arc<dyn SessionEventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Rehydrate the session from the persistent store.
    ///
    /// Synchronous by design: it must reach a defined state before the first
    /// protected view asks the guard, so a valid cached session never flashes
    /// as signed-out. Cached credentials are trusted without a round-trip;
    /// the first API call to use the token is responsible for rejecting a
    /// revoked one (see [`Self::invalidate`]).
    pub fn bootstrap(&self) {
        let token = self.read_key(TOKEN_KEY);
        let user_json = self.read_key(USER_KEY);

        match (token, user_json) {
            (Some(token), Some(json)) => match serde_json::from_str::<User>(&json) {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, "session restored from cache");
                    self.store.restore(user, AuthToken::from(token));
                }
                Err(error) => {
                    tracing::warn!(%error, "cached user record unreadable, discarding session");
                    self.clear_cached_credentials();
                    self.store.settle_idle();
                }
            },
            (None, None) => self.store.settle_idle(),
            // The two keys are written together; a lone survivor means the
            // cache is inconsistent and must not be trusted.
            _ => {
                tracing::warn!("cached credentials incomplete, discarding session");
                self.clear_cached_credentials();
                self.store.settle_idle();
            }
        }
    }

    /// Sign in. Serialized: a call made while another attempt is in flight
    /// is rejected immediately rather than racing it.
    pub async fn login(&self, credentials: Credentials) -> LoginOutcome {
        let Some(attempt) = self.store.begin_attempt() else {
            tracing::warn!("sign-in rejected, another attempt is in flight");
            return LoginOutcome::failed("A sign-in is already in progress");
        };

        match self.gateway.login(&credentials).await {
            Ok(grant) => {
                if !self
                    .store
                    .complete_success(attempt, grant.user.clone(), grant.token.clone())
                {
                    tracing::debug!(attempt, "stale sign-in grant discarded");
                    return LoginOutcome::failed("Sign-in was superseded");
                }

                // Both keys or neither: token first, user record alongside.
                self.write_key(TOKEN_KEY, grant.token.as_str());
                self.persist_user(&grant.user);

                tracing::info!(user_id = %grant.user.id, role = %grant.user.role, "user signed in");
                self.toasts
                    .success(&format!("Welcome back, {}", grant.user.first_name));
                LoginOutcome::Success
            }
            Err(error) => {
                let message = error.to_string();
                if !self.store.complete_failure(attempt, message.clone()) {
                    tracing::debug!(attempt, "stale sign-in failure discarded");
                    return LoginOutcome::failed("Sign-in was superseded");
                }

                tracing::warn!(%error, "sign-in failed");
                self.toasts.error(&message);
                LoginOutcome::Failed { message }
            }
        }
    }

    /// Sign out. The remote call is best-effort; local teardown always runs,
    /// in that order. Idempotent.
    pub async fn logout(&self) {
        let token = self.store.snapshot().token;
        if let Err(error) = self.gateway.logout(token.as_ref()).await {
            tracing::warn!(%error, "remote sign-out failed, clearing local session anyway");
        }

        self.teardown_local();
        tracing::info!("user signed out");
        self.toasts.info("Signed out");
    }

    /// Replace the signed-in user's record (whole-object, no merge) and
    /// refresh its cached serialization. A no-op while signed out.
    pub fn update_user(&self, user: User) {
        if !self.store.replace_user(user.clone()) {
            tracing::warn!("ignoring profile update while signed out");
            return;
        }
        self.persist_user(&user);
    }

    /// Local-only teardown for transport code that sees the backend reject
    /// the cached token. No remote call, no toast - the caller decides how
    /// to surface it.
    pub fn invalidate(&self) {
        tracing::warn!("session invalidated by backend, clearing local state");
        self.teardown_local();
    }

    fn teardown_local(&self) {
        self.store.clear();
        self.clear_cached_credentials();
        for sink in &self.sinks {
            sink.session_ended();
        }
    }

    fn persist_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.write_key(USER_KEY, &json),
            Err(error) => tracing::error!(%error, "failed to serialize user for cache"),
        }
    }

    fn clear_cached_credentials(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(error) = self.cache.remove(key) {
                tracing::error!(key, %error, "failed to clear cache key");
            }
        }
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.cache.get(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(key, %error, "failed to read cache key");
                None
            }
        }
    }

    fn write_key(&self, key: &str, value: &str) {
        if let Err(error) = self.cache.put(key, value) {
            tracing::error!(key, %error, "failed to write cache key");
        }
    }
}
