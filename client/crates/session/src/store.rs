//! Session Store
//!
//! The process-wide authentication state machine. One instance is created at
//! startup and shared by reference; transitions are crate-internal so that
//! only the controller can drive them, while any consumer may take a read
//! snapshot.
//!
//! Phases:
//! - `Loading` - bootstrap or a sign-in attempt in flight
//! - `Idle` - no attempt yet, or signed out
//! - `Authenticated` - carries the user and token
//! - `Error` - last sign-in attempt failed, carries the message
//!
//! `Authenticated` owning both user and token is what makes the core
//! invariant (`is_authenticated` iff user and token present) hold for every
//! reachable state.
//!
//! Each sign-in attempt is numbered. A completion is applied only while its
//! attempt number is still current; both a newer attempt and a logout bump
//! the number, so a slow response can never clobber state it no longer owns.

use std::sync::{Mutex, MutexGuard};

use crate::domain::entity::user::User;
use crate::domain::value_object::auth_token::AuthToken;

#[derive(Debug, Clone)]
enum Phase {
    Loading,
    Idle,
    Authenticated { user: User, token: AuthToken },
    Error { message: String },
}

#[derive(Debug)]
struct Inner {
    phase: Phase,
    /// Monotonic sign-in attempt number; completions must match it.
    attempt: u64,
    /// Whether a sign-in attempt is currently awaiting its gateway response.
    attempt_in_flight: bool,
}

/// Flat read view of the session, cheap to clone and hand to views.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub token: Option<AuthToken>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

/// The session state machine.
pub struct SessionStore {
    inner: Mutex<Inner>,
}

impl SessionStore {
    /// Create the store in the bootstrap-pending phase.
    ///
    /// `SessionController::bootstrap` must run before the first
    /// authorization check so consumers never observe this transient phase.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                phase: Phase::Loading,
                attempt: 0,
                attempt_in_flight: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Current read view.
    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.lock();
        match &inner.phase {
            Phase::Loading => SessionSnapshot {
                loading: true,
                ..SessionSnapshot::default()
            },
            Phase::Idle => SessionSnapshot::default(),
            Phase::Authenticated { user, token } => SessionSnapshot {
                user: Some(user.clone()),
                token: Some(token.clone()),
                is_authenticated: true,
                ..SessionSnapshot::default()
            },
            Phase::Error { message } => SessionSnapshot {
                error: Some(message.clone()),
                ..SessionSnapshot::default()
            },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.lock().phase, Phase::Authenticated { .. })
    }

    /// Bootstrap hit: adopt cached credentials without a network round-trip.
    pub(crate) fn restore(&self, user: User, token: AuthToken) {
        let mut inner = self.lock();
        inner.phase = Phase::Authenticated { user, token };
    }

    /// Bootstrap miss: leave the unauthenticated rest state.
    pub(crate) fn settle_idle(&self) {
        let mut inner = self.lock();
        if matches!(inner.phase, Phase::Loading) {
            inner.phase = Phase::Idle;
        }
    }

    /// Open a sign-in attempt, returning its number, or `None` while another
    /// attempt is still in flight (sign-ins are serialized).
    pub(crate) fn begin_attempt(&self) -> Option<u64> {
        let mut inner = self.lock();
        if inner.attempt_in_flight {
            return None;
        }
        inner.attempt += 1;
        inner.attempt_in_flight = true;
        inner.phase = Phase::Loading;
        Some(inner.attempt)
    }

    /// Settle an attempt with a grant. Returns `false` when the attempt is
    /// stale (superseded or logged out meanwhile) and nothing was applied.
    pub(crate) fn complete_success(&self, attempt: u64, user: User, token: AuthToken) -> bool {
        let mut inner = self.lock();
        if inner.attempt != attempt {
            return false;
        }
        inner.attempt_in_flight = false;
        inner.phase = Phase::Authenticated { user, token };
        true
    }

    /// Settle an attempt with a failure message. Same staleness rule as
    /// `complete_success`.
    pub(crate) fn complete_failure(&self, attempt: u64, message: String) -> bool {
        let mut inner = self.lock();
        if inner.attempt != attempt {
            return false;
        }
        inner.attempt_in_flight = false;
        inner.phase = Phase::Error { message };
        true
    }

    /// Logout transition: return to the unauthenticated rest state and
    /// invalidate any in-flight attempt.
    pub(crate) fn clear(&self) {
        let mut inner = self.lock();
        inner.attempt += 1;
        inner.attempt_in_flight = false;
        inner.phase = Phase::Idle;
    }

    /// Replace the user record, leaving the token untouched. Returns `false`
    /// (and changes nothing) outside the authenticated phase.
    pub(crate) fn replace_user(&self, user: User) -> bool {
        let mut inner = self.lock();
        match &mut inner.phase {
            Phase::Authenticated { user: current, .. } => {
                *current = user;
                true
            }
            _ => false,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
