//! Repository Layer
//!
//! Key-value slot abstraction plus the readers/writers for the task and
//! theme slots.

mod memory;
mod task_repo;
mod theme_repo;
mod traits;


pub use memory::MemoryStorage;
pub use task_repo::TaskRepository;
pub use theme_repo::ThemeRepository;
pub use traits::{SlotStorage, StorageError, StorageResult};
