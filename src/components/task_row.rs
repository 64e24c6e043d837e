//! Task Row Component
//!
//! One task with its edit/delete/complete controls. The controls only carry
//! data attributes; clicks are handled by the enclosing `TaskList`.

use leptos::prelude::*;
use todo_store::Task;

use crate::row_action::RowActionKind;
use crate::store::{use_app_store, AppStateStoreFields};

pub fn row_class(completed: bool) -> &'static str {
    if completed {
        "task-item completed"
    } else {
        "task-item"
    }
}

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();

    let id = task.id.to_string();
    let completed = task.completed;
    let row = task.clone();
    // Hidden rows stay mounted so the filter only changes visibility
    let display = move || {
        if store.todo().read().is_visible(&row) {
            ""
        } else {
            "none"
        }
    };

    view! {
        <li class=row_class(completed) style:display=display>
            <span class="task-description">{task.text}</span>
            <button
                type="button"
                class="edit-button"
                title="Edit"
                data-action=RowActionKind::Edit.as_str()
                data-id=id.clone()
            >
                "✎"
            </button>
            <button
                type="button"
                class="delete-button"
                title="Delete"
                data-action=RowActionKind::Delete.as_str()
                data-id=id.clone()
            >
                "✖"
            </button>
            <button
                type="button"
                class="complete-button"
                title=if completed { "Mark as active" } else { "Mark as done" }
                data-action=RowActionKind::Complete.as_str()
                data-id=id
            >
                "✔"
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class() {
        assert_eq!(row_class(false), "task-item");
        assert_eq!(row_class(true), "task-item completed");
    }
}
