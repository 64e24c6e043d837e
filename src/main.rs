//! To-Do List Frontend Entry Point

mod app;
mod components;
mod config;
mod dialogs;
mod document;
mod row_action;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_tracing::set_as_global_default();
    }

    tracing::info!("starting to-do list frontend");
    mount_to_body(App);
}
