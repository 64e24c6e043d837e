//! Delegated Row Actions
//!
//! Row buttons carry `data-action` and `data-id` attributes instead of their
//! own handlers. One listener on the list resolves a click to a `RowAction`.

use todo_store::TaskId;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    Edit,
    Delete,
    Complete,
}

impl RowActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowActionKind::Edit => "edit",
            RowActionKind::Delete => "delete",
            RowActionKind::Complete => "complete",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "edit" => Some(RowActionKind::Edit),
            "delete" => Some(RowActionKind::Delete),
            "complete" => Some(RowActionKind::Complete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub kind: RowActionKind,
    pub id: TaskId,
}

impl RowAction {
    /// Build from the two attribute values
    pub fn parse(action: &str, id: &str) -> Option<Self> {
        Some(Self {
            kind: RowActionKind::from_str(action)?,
            id: id.parse().ok()?,
        })
    }

    /// Resolve a click anywhere inside a row control
    pub fn from_event(ev: &web_sys::Event) -> Option<Self> {
        let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
        let control = target.closest("[data-action]").ok()??;
        Self::parse(&control.get_attribute("data-action")?, &control.get_attribute("data-id")?)
    }
}
