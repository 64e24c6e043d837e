//! Store Configuration
//!
//! Slot names and theme persistence. Every field is optional in JSON form.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TASKS_KEY: &str = "tasks";
pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Slot holding the JSON task array
    pub tasks_key: String,
    /// Slot holding the theme preference
    pub theme_key: String,
    /// Restore and remember the theme across reloads
    pub persist_theme: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            persist_theme: true,
        }
    }
}

impl StoreConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.tasks_key, "tasks");
        assert_eq!(config.theme_key, "theme");
        assert!(config.persist_theme);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = StoreConfig::from_json(r#"{"tasks_key":"todo:v1"}"#).unwrap();
        assert_eq!(config.tasks_key, "todo:v1");
        assert_eq!(config.theme_key, DEFAULT_THEME_KEY);
        assert!(config.persist_theme);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(StoreConfig::from_json("tasks_key=x").is_err());
    }
}
