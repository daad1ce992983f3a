//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the portal client core:
//! - Durable key-value storage (the credential cache)
//! - Toast dispatch (ephemeral UI feedback channel)
//!
//! Nothing in this crate knows about sessions or notifications; it only
//! provides the seams those layers plug into.

pub mod kv;
pub mod toast;

// Re-exports for convenience
pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use toast::{ToastLevel, ToastSink, TracingToasts};
