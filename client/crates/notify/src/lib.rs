//! Notification Core
//!
//! The read-state tracker behind the portal's notification panel: an
//! ordered, newest-first list of notifications with a derived unread
//! counter. Scoped to one authenticated session - the store registers as a
//! session-end observer and empties itself when the user signs out, so a
//! later user on the same process never sees a predecessor's notifications.

pub mod model;
pub mod store;

// Re-exports for convenience
pub use model::{Notification, NotificationId, NotificationKind};
pub use store::{NotificationSnapshot, NotificationStore};
