//! Durable key-value persistence for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transport keeps the bearer token under [`AUTH_TOKEN_KEY`] and the content
//! store keeps the signed-in email under [`USER_EMAIL_KEY`]. Both receive the
//! same `Arc<dyn KeyValueStore>` so a session survives process restarts.
//!
//! ERROR HANDLING
//! ==============
//! Writes return [`StorageError`]; callers log and continue, since a failed
//! write only costs the next process its stored session.

mod file;
mod memory;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key for the bearer token issued by `/generateToken`.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key for the email the token was issued to.
pub const USER_EMAIL_KEY: &str = "user_email";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value port. Implementations use interior mutability so a single
/// instance can be shared by the transport and the content store.
pub trait KeyValueStore: Send + Sync {
    /// Value for `key`, if one is stored.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot persist the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot persist the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
