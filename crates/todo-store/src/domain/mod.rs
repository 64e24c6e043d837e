//! Domain Layer
//!
//! Contains the task entity, display modes and core abstractions.
//! Nothing here knows about storage backends or rendering.

mod entity;
mod filter;
mod task;
mod theme;

pub use entity::{DomainError, DomainResult, Entity};
pub use filter::FilterMode;
pub use task::{Task, TaskId, TaskRecord};
pub use theme::{Theme, DARK_CLASS};
