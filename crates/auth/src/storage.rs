//! Durable session storage port.

use std::sync::Arc;

use thiserror::Error;

/// Logical keys the session store persists under.
///
/// Kept as three separate entries so callers with narrower needs (e.g. HTTP
/// plumbing that only wants the bearer token) can read one key without
/// deserializing the whole session.
pub mod keys {
    /// Serialized session envelope.
    pub const SESSION: &str = "loomerp.session";
    /// Raw bearer token.
    pub const TOKEN: &str = "loomerp.token";
    /// Serialized permission matrix.
    pub const PERMISSIONS: &str = "loomerp.permissions";
}

/// Durable storage operation error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Key/value facility backing session persistence.
///
/// The medium is the adapter's business (browser storage bridge, local
/// file, secret manager); this port assumes nothing beyond get/set/remove
/// over string keys.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S> SessionStorage for Arc<S>
where
    S: SessionStorage + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
