//! Access Guard
//!
//! Pure authorization check consumed by every protected view. Reads only a
//! session snapshot - never the network, never mutable state - so a view can
//! re-evaluate it on every render tick for free.
//!
//! Denials are handled by redirecting to the login surface (preserving the
//! requested location is the caller's job); they are never toasted.

use crate::domain::value_object::role::Role;
use crate::store::SessionSnapshot;

/// Authorization verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenyReason),
}

/// Why access was denied. Kept distinct so callers can prompt a login for
/// `Unauthenticated` but show "not permitted" for `Forbidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No valid session at all.
    Unauthenticated,
    /// Signed in, but the role is not on the allow-list.
    Forbidden,
}

impl AccessDecision {
    #[inline]
    pub const fn is_allow(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Check a session against a role allow-list.
///
/// An empty `required_roles` means any authenticated user may pass.
pub fn authorize(session: &SessionSnapshot, required_roles: &[Role]) -> AccessDecision {
    if !session.is_authenticated {
        return AccessDecision::Deny(DenyReason::Unauthenticated);
    }

    if !required_roles.is_empty() {
        match &session.user {
            Some(user) if required_roles.contains(&user.role) => {}
            _ => return AccessDecision::Deny(DenyReason::Forbidden),
        }
    }

    AccessDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::{auth_token::AuthToken, user_id::UserId};

    fn signed_in(role: Role) -> SessionSnapshot {
        SessionSnapshot {
            user: Some(User {
                id: UserId::from("1"),
                first_name: "Ada".to_string(),
                last_name: "Nash".to_string(),
                email: "a@x.com".to_string(),
                role,
            }),
            token: Some(AuthToken::from("tok-1")),
            is_authenticated: true,
            loading: false,
            error: None,
        }
    }

    #[test]
    fn unauthenticated_is_denied_regardless_of_roles() {
        let anonymous = SessionSnapshot::default();
        assert_eq!(
            authorize(&anonymous, &[]),
            AccessDecision::Deny(DenyReason::Unauthenticated)
        );
        assert_eq!(
            authorize(&anonymous, &[Role::Admin]),
            AccessDecision::Deny(DenyReason::Unauthenticated)
        );
    }

    #[test]
    fn empty_allow_list_admits_any_authenticated_user() {
        assert_eq!(authorize(&signed_in(Role::Patient), &[]), AccessDecision::Allow);
        assert_eq!(authorize(&signed_in(Role::Admin), &[]), AccessDecision::Allow);
    }

    #[test]
    fn role_gate() {
        let doctor = signed_in(Role::Doctor);
        assert_eq!(
            authorize(&doctor, &[Role::Admin]),
            AccessDecision::Deny(DenyReason::Forbidden)
        );
        assert_eq!(
            authorize(&doctor, &[Role::Doctor, Role::Admin]),
            AccessDecision::Allow
        );
    }

    #[test]
    fn manager_or_admin_gate_matches_reports_surface() {
        let gate = [Role::Manager, Role::Admin];
        assert_eq!(authorize(&signed_in(Role::Manager), &gate), AccessDecision::Allow);
        assert_eq!(
            authorize(&signed_in(Role::Staff), &gate),
            AccessDecision::Deny(DenyReason::Forbidden)
        );
    }
}
