//! Frontend Configuration
//!
//! Optional JSON overrides for `StoreConfig`, read from
//! `<meta name="todo-config" content='{...}'>` in `index.html`.

use todo_store::StoreConfig;

use crate::document;

pub const CONFIG_META: &str = "todo-config";

pub fn load_config() -> StoreConfig {
    parse_config(document::meta_content(CONFIG_META).as_deref())
}

fn parse_config(raw: Option<&str>) -> StoreConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return StoreConfig::default();
    };
    StoreConfig::from_json(raw).unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring invalid {CONFIG_META} meta");
        StoreConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_meta_uses_defaults() {
        assert_eq!(parse_config(None), StoreConfig::default());
        assert_eq!(parse_config(Some("   ")), StoreConfig::default());
    }

    #[test]
    fn test_override_applies() {
        let config = parse_config(Some(r#"{"persist_theme": false}"#));
        assert!(!config.persist_theme);
        assert_eq!(config.tasks_key, "tasks");
    }

    #[test]
    fn test_invalid_meta_falls_back() {
        assert_eq!(parse_config(Some("{oops")), StoreConfig::default());
    }
}
