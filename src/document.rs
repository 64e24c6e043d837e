//! Document-level helpers: the root theme class and `<meta>` lookups.

use todo_store::domain::DARK_CLASS;
use todo_store::Theme;

fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Put or remove the dark class on `<html>`
pub fn apply_theme(theme: Theme) {
    let Some(root) = root_element() else {
        tracing::warn!("no document root to theme");
        return;
    };
    if let Err(error) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
        tracing::error!(?error, "failed to apply theme class");
    }
}

/// `content` of `<meta name="...">`, if present
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{name}\"]");
    document.query_selector(&selector).ok()??.get_attribute("content")
}
