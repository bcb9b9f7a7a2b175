//! Per-session cart storage.

pub mod store;

pub use store::{InMemorySessionStore, SessionStore};
