//! User Entity
//!
//! The signed-in identity as delivered by the auth backend. Treated as
//! immutable: profile updates replace the whole record, there is no partial
//! merge.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{role::Role, user_id::UserId};

/// User entity
///
/// Field names map to the backend's camelCase JSON, which is also the
/// serialization cached under the `user` key of the persistent store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Display name for greetings and audit events.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
