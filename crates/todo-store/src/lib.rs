//! To-Do Store
//!
//! Layered architecture:
//! - domain: tasks, filter mode, theme and errors
//! - repository: storage-slot abstraction and the slot readers/writers
//! - task_list: the ordered in-memory task collection
//! - store: application state that persists after every mutation
//!
//! Nothing in here touches the DOM, so the whole crate runs under plain
//! `cargo test`.

pub mod action;
pub mod config;
pub mod domain;
pub mod repository;
pub mod store;
pub mod task_list;

pub use action::{ActionOutcome, TaskAction};
pub use config::StoreConfig;
pub use domain::{DomainError, DomainResult, Entity, FilterMode, Task, TaskId, TaskRecord, Theme};
pub use repository::{MemoryStorage, SlotStorage, StorageError, StorageResult};
pub use store::TodoStore;
pub use task_list::TaskList;
