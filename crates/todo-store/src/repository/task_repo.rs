//! Task Slot Repository
//!
//! The slot holds a JSON array of `{"text", "completed"}` objects. There is
//! no version field. A slot that fails to read or is not a JSON array loads
//! as empty; inside the array each record is decoded on its own and bad
//! ones are skipped.

use crate::domain::TaskRecord;

use super::traits::{SlotStorage, StorageError, StorageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRepository {
    key: String,
}

impl TaskRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read every record in stored order
    pub fn load<S: SlotStorage + ?Sized>(&self, storage: &S) -> Vec<TaskRecord> {
        let raw = match storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(%error, key = %self.key, "task slot unreadable, starting empty");
                return Vec::new();
            }
        };

        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values,
            Err(error) => {
                tracing::warn!(%error, key = %self.key, "task slot unparseable, starting empty");
                return Vec::new();
            }
        };

        let records: Vec<TaskRecord> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<TaskRecord>(value) {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::warn!(%error, index, key = %self.key, "dropping malformed task record");
                    None
                }
            })
            .collect();
        tracing::debug!(count = records.len(), key = %self.key, "loaded tasks");
        records
    }

    /// Replace the slot with exactly `records`
    pub fn save<S: SlotStorage + ?Sized>(&self, storage: &mut S, records: &[TaskRecord]) -> StorageResult<()> {
        let json = serde_json::to_string(records).map_err(|source| StorageError::Encode {
            key: self.key.clone(),
            source,
        })?;
        storage.set(&self.key, &json)
    }
}
