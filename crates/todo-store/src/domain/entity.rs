//! Domain Layer - Core Entity Trait
//!
//! Every entity carries a stable identifier that never reaches storage.

use thiserror::Error;

use super::task::TaskId;
use crate::repository::StorageError;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Add was attempted with blank text. The message is shown to the user as is.
    #[error("Please enter a task.")]
    EmptyText,
    #[error("task {0} not found")]
    NotFound(TaskId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl DomainError {
    /// Whether this error should be surfaced to the user as a warning
    pub fn is_user_facing(&self) -> bool {
        matches!(self, DomainError::EmptyText)
    }
}
