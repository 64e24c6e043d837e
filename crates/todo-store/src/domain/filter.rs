//! Filter Mode
//!
//! Controls which rows are visible. Never affects what is persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every task is shown
    #[default]
    All,
    /// Only completed tasks are shown
    Completed,
    /// Only tasks still to do are shown
    Active,
}

impl FilterMode {
    /// Selector order
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Completed, FilterMode::Active];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Active => "active",
        }
    }

    /// Parse a selector value; anything unknown shows everything
    pub fn from_str(s: &str) -> Self {
        match s {
            "completed" => FilterMode::Completed,
            "active" => FilterMode::Active,
            _ => FilterMode::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Active => "Active",
        }
    }

    /// Whether a row with the given completion state is visible
    pub fn shows(&self, completed: bool) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => completed,
            FilterMode::Active => !completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_table() {
        assert!(FilterMode::All.shows(true));
        assert!(FilterMode::All.shows(false));
        assert!(FilterMode::Completed.shows(true));
        assert!(!FilterMode::Completed.shows(false));
        assert!(!FilterMode::Active.shows(true));
        assert!(FilterMode::Active.shows(false));
    }

    #[test]
    fn test_selector_values() {
        for mode in FilterMode::ALL {
            assert_eq!(FilterMode::from_str(mode.as_str()), mode);
        }
        assert_eq!(FilterMode::from_str("bogus"), FilterMode::All);
    }
}
