//! Browser Local Storage
//!
//! `SlotStorage` over `window.localStorage`. The handle is looked up on every
//! call, so the type itself holds nothing and is `Send + Sync`.

use todo_store::{SlotStorage, StorageError, StorageResult};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> StorageResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl SlotStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        local_storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        local_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }
}
