//! To-Do List App
//!
//! Root component: opens the store, keeps the theme class in sync and lays
//! out the form, filter and list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterSelect, NewTaskForm, TaskList, ThemeToggle};
use crate::config;
use crate::document;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = config::load_config();
    let store = Store::new(AppState::open(&config));

    // Provide the store to all children
    provide_context(store);

    // Mirror the theme onto the document root
    Effect::new(move |_| {
        document::apply_theme(store.todo().read().theme());
    });

    let summary = move || {
        let todo = store.todo().read();
        let list = todo.list();
        format!("{} active, {} total", list.remaining(), list.len())
    };

    view! {
        <main class="todo-app">
            <header class="todo-header">
                <h1>"To-Do List"</h1>
                <ThemeToggle />
            </header>

            <NewTaskForm />

            <div class="toolbar">
                <label class="filter-label">"Show" <FilterSelect /></label>
            </div>

            <TaskList />

            <p class="item-count">{summary}</p>
        </main>
    }
}
