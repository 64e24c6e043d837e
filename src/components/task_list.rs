//! Task List Component
//!
//! Renders every task and owns the single click listener for all rows.

use leptos::prelude::*;
use todo_store::TaskAction;

use crate::components::TaskRow;
use crate::dialogs::{self, EDIT_PROMPT};
use crate::row_action::{RowAction, RowActionKind};
use crate::store::{dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(RowAction { kind, id }) = RowAction::from_event(&ev) else {
            return;
        };
        let action = match kind {
            RowActionKind::Edit => {
                let current = store
                    .todo()
                    .read_untracked()
                    .list()
                    .get(id)
                    .map(|task| task.text.clone());
                let Some(current) = current else {
                    return;
                };
                TaskAction::Edit {
                    id,
                    replacement: dialogs::prompt(EDIT_PROMPT, &current),
                }
            }
            RowActionKind::Delete => TaskAction::Delete(id),
            RowActionKind::Complete => TaskAction::ToggleComplete(id),
        };
        dispatch(store, action);
    };

    view! {
        <ul class="task-list" on:click=on_click>
            <For
                each=move || store.todo().read().list().tasks().to_vec()
                // Text and completion are part of the key so edits re-render the row
                key=|task| (task.id, task.text.clone(), task.completed)
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
