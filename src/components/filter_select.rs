//! Filter Select Component

use leptos::prelude::*;
use todo_store::{FilterMode, TaskAction};

use crate::store::{dispatch, use_app_store, AppStateStoreFields};

/// `all` / `completed` / `active` selector
#[component]
pub fn FilterSelect() -> impl IntoView {
    let store = use_app_store();

    view! {
        <select
            class="filter-select"
            prop:value=move || store.todo().read().filter().as_str()
            on:change=move |ev| {
                let mode = FilterMode::from_str(&event_target_value(&ev));
                dispatch(store, TaskAction::SetFilter(mode));
            }
        >
            {FilterMode::ALL.iter().map(|mode| view! {
                <option value=mode.as_str()>{mode.label()}</option>
            }).collect_view()}
        </select>
    }
}
