/// Session expiry handler and the slot that holds it
pub mod handler;
/// Key-value persistence for the session record
pub mod store;

pub use handler::{SessionExpiredHandler, SessionExpiryHook};
pub use store::{FileStore, KeyValueStore, MemoryStore};
