//! Blocking browser dialogs used for validation feedback and editing.

/// Label shown above the edit prompt
pub const EDIT_PROMPT: &str = "Edit task:";

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(message, "no window to alert in");
        return;
    };
    if let Err(error) = window.alert_with_message(message) {
        tracing::error!(?error, "alert failed");
    }
}

/// Ask for replacement text seeded with `current`; `None` when dismissed
pub fn prompt(message: &str, current: &str) -> Option<String> {
    let window = web_sys::window()?;
    match window.prompt_with_message_and_default(message, current) {
        Ok(answer) => answer,
        Err(error) => {
            tracing::error!(?error, "prompt failed");
            None
        }
    }
}
