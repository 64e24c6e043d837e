//! UI Components
//!
//! Leptos components for the to-do list.

mod filter_select;
mod new_task_form;
mod task_list;
mod task_row;
mod theme_toggle;

pub use filter_select::FilterSelect;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use theme_toggle::ThemeToggle;
