//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: the input draft
//! re-renders on its own, the task state re-renders the list.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_store::{ActionOutcome, StoreConfig, TaskAction, TodoStore};

use crate::dialogs;
use crate::storage::BrowserStorage;

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Tasks, filter and theme, mirrored into local storage
    pub todo: TodoStore<BrowserStorage>,
    /// Current contents of the new-task input
    pub draft: String,
}

impl AppState {
    pub fn open(config: &StoreConfig) -> Self {
        Self {
            todo: TodoStore::open(BrowserStorage, config),
            draft: String::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run one user action against the store.
///
/// Rejected input raises a blocking alert; a successful add clears the draft.
pub fn dispatch(store: AppStore, action: TaskAction) -> ActionOutcome {
    let clears_draft = matches!(action, TaskAction::Add(_));
    let outcome = store.todo().write().dispatch(action);

    if let Some(warning) = outcome.warning() {
        dialogs::alert(warning);
    } else if clears_draft && outcome == ActionOutcome::Saved {
        store.draft().write().clear();
    }
    outcome
}
