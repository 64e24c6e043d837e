//! Task Collection
//!
//! Ordered tasks in display order. This is the single source of truth; the
//! rendered rows and the storage slot are both derived from it.

use crate::domain::{DomainError, DomainResult, Entity, FilterMode, Task, TaskId, TaskRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored records, minting ids in stored order
    pub fn from_records(records: impl IntoIterator<Item = TaskRecord>) -> Self {
        let mut list = Self::new();
        for record in records {
            let id = list.mint_id();
            list.tasks.push(Task::from_record(id, record));
        }
        list
    }

    fn mint_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId::new(self.next_id)
    }

    fn position(&self, id: TaskId) -> DomainResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(DomainError::NotFound(id))
    }

    /// Append a new not-completed task. Surrounding whitespace is stripped
    /// and blank input is rejected without touching the list.
    pub fn add(&mut self, raw: &str) -> DomainResult<TaskId> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyText);
        }
        let id = self.mint_id();
        self.tasks.push(Task::new(id, text));
        Ok(id)
    }

    /// Replace a task's text. A cancelled prompt (`None`) and an empty
    /// answer are both ignored and return `Ok(false)`. The replacement is
    /// stored as typed.
    pub fn edit(&mut self, id: TaskId, replacement: Option<&str>) -> DomainResult<bool> {
        let index = self.position(id)?;
        match replacement {
            Some(text) if !text.is_empty() => {
                self.tasks[index].text = text.to_string();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn remove(&mut self, id: TaskId) -> DomainResult<Task> {
        let index = self.position(id)?;
        Ok(self.tasks.remove(index))
    }

    /// Flip completion, returning the new state
    pub fn toggle(&mut self, id: TaskId) -> DomainResult<bool> {
        let index = self.position(id)?;
        Ok(self.tasks[index].toggle())
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks still to do
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    /// Tasks the given filter leaves visible, in order
    pub fn visible(&self, filter: FilterMode) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| filter.shows(task.completed))
    }

    /// Every task as a persistable record, hidden ones included
    pub fn snapshot(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(Task::to_record).collect()
    }
}
