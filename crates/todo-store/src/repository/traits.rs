//! Repository Layer - Core Traits
//!
//! Defines the abstract key-value storage the slots live in.
//! Implementations can use browser local storage, in-memory maps, etc.

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("failed to read slot `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write slot `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode slot `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Named string slots with `get`/`set` semantics and no expiry
pub trait SlotStorage {
    /// Read a slot; `Ok(None)` when it was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite a slot in full
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
