//! Domain Layer
//!
//! Entities, value objects, and the gateway trait.

pub mod entity;
pub mod gateway;
pub mod value_object;

// Re-exports
pub use entity::user::User;
pub use gateway::{AuthGateway, LoginGrant};
