//! Task Entity
//!
//! `TaskRecord` is the persisted `{text, completed}` pair. `Task` is the
//! in-memory row: a record plus an id minted when it enters the list.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::Entity;

/// Stable per-task identifier, unique within one loaded session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TaskId)
    }
}

/// One persisted to-do entry, exactly as it appears in the storage slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub text: String,
    #[serde(default, deserialize_with = "null_as_false")]
    pub completed: bool,
}

/// `"completed": null` reads as not completed
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

impl TaskRecord {
    pub fn new(text: impl Into<String>, completed: bool) -> Self {
        Self {
            text: text.into(),
            completed,
        }
    }
}

/// A task as held by the running app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier, never persisted
    pub id: TaskId,
    /// Description text
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn from_record(id: TaskId, record: TaskRecord) -> Self {
        Self {
            id,
            text: record.text,
            completed: record.completed,
        }
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord::new(self.text.clone(), self.completed)
    }

    /// Flip completion, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(TaskId::new(1), "Buy milk");
        assert_eq!(task.id(), TaskId::new(1));
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_toggle_flips_back_and_forth() {
        let mut task = Task::new(TaskId::new(1), "Buy milk");
        assert!(task.toggle());
        assert!(!task.toggle());
    }

    #[test]
    fn test_record_wire_format() {
        let record = TaskRecord::new("Buy milk", true);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"text":"Buy milk","completed":true}"#);
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let record: TaskRecord = serde_json::from_str(r#"{"text":"Walk dog"}"#).unwrap();
        assert_eq!(record, TaskRecord::new("Walk dog", false));
    }

    #[test]
    fn test_null_completed_reads_as_false() {
        let record: TaskRecord = serde_json::from_str(r#"{"text":"b","completed":null}"#).unwrap();
        assert_eq!(record, TaskRecord::new("b", false));
    }

    #[test]
    fn test_task_id_parses_from_attribute_text() {
        assert_eq!("42".parse::<TaskId>().unwrap(), TaskId::new(42));
        assert_eq!(" 7 ".parse::<TaskId>().unwrap(), TaskId::new(7));
        assert!("seven".parse::<TaskId>().is_err());
        assert_eq!(TaskId::new(9).to_string(), "9");
    }
}
