//! Theme Slot Repository
//!
//! Stores the bare `light`/`dark` string.

use crate::domain::Theme;

use super::traits::{SlotStorage, StorageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRepository {
    key: String,
}

impl ThemeRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn load<S: SlotStorage + ?Sized>(&self, storage: &S) -> Theme {
        match storage.get(&self.key) {
            Ok(stored) => stored.as_deref().map(Theme::from_str).unwrap_or_default(),
            Err(error) => {
                tracing::warn!(%error, key = %self.key, "theme slot unreadable");
                Theme::default()
            }
        }
    }

    pub fn save<S: SlotStorage + ?Sized>(&self, storage: &mut S, theme: Theme) -> StorageResult<()> {
        storage.set(&self.key, theme.as_str())
    }
}
