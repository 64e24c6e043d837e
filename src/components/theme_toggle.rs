//! Theme Toggle Component

use leptos::prelude::*;
use todo_store::TaskAction;

use crate::store::{dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();
    let is_dark = move || store.todo().read().theme().is_dark();

    view! {
        <button
            type="button"
            class="theme-toggle"
            title=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| {
                dispatch(store, TaskAction::ToggleTheme);
            }
        >
            {move || if is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
