//! New Task Form Component
//!
//! Text input plus Add button. Enter in the input submits the form.

use leptos::prelude::*;
use todo_store::TaskAction;

use crate::store::{dispatch, use_app_store, AppStateStoreFields};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = store.draft().get_untracked();
        dispatch(store, TaskAction::Add(text));
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                class="task-input"
                placeholder="Add a new task..."
                prop:value=move || store.draft().get()
                on:input=move |ev| *store.draft().write() = event_target_value(&ev)
            />
            <button type="submit" class="add-task-button">"Add"</button>
        </form>
    }
}
