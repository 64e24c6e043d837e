//! User actions and what became of them.

use crate::domain::{FilterMode, TaskId};

/// Every user event the app reacts to, keyed by the task it targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Add(String),
    /// `replacement` is `None` when the prompt was dismissed
    Edit {
        id: TaskId,
        replacement: Option<String>,
    },
    Delete(TaskId),
    ToggleComplete(TaskId),
    SetFilter(FilterMode),
    ToggleTheme,
}

impl TaskAction {
    pub fn name(&self) -> &'static str {
        match self {
            TaskAction::Add(_) => "add",
            TaskAction::Edit { .. } => "edit",
            TaskAction::Delete(_) => "delete",
            TaskAction::ToggleComplete(_) => "toggle_complete",
            TaskAction::SetFilter(_) => "set_filter",
            TaskAction::ToggleTheme => "toggle_theme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State changed and the slots were rewritten
    Saved,
    /// Nothing changed
    Unchanged,
    /// Only visibility changed; storage untouched
    DisplayOnly,
    /// Input was refused; the message is meant for the user
    Rejected(String),
}

impl ActionOutcome {
    pub fn warning(&self) -> Option<&str> {
        match self {
            ActionOutcome::Rejected(message) => Some(message),
            _ => None,
        }
    }
}
