//! UI Components
//!
//! Leptos components that mount the dashboard's rendered output.

mod email_list;
mod email_modal;
mod item_list;
mod item_modal;
mod toasts;
mod tracker_status;

pub use email_list::EmailList;
pub use email_modal::EmailModal;
pub use item_list::ItemList;
pub use item_modal::ItemModal;
pub use toasts::{Toast, ToastNotifier, ToastStack};
pub use tracker_status::TrackerStatusBadge;

use wasm_bindgen::JsCast;

use crate::render::ListAction;

/// Class that marks a modal backdrop
pub const MODAL_CLASS: &str = "modal";

/// Whether a space-separated class attribute contains `class`
pub fn has_class(class_attr: &str, class: &str) -> bool {
    class_attr.split_whitespace().any(|c| c == class)
}

/// True when the click landed on the backdrop itself, not the dialog
pub fn is_backdrop_click(ev: &web_sys::MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|el| has_class(&el.class_name(), MODAL_CLASS))
        .unwrap_or(false)
}

/// Resolve a click inside a rendered list to the button's action
pub fn list_action_from_click(ev: &web_sys::MouseEvent) -> Option<ListAction> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("[data-action]").ok()??;
    let action = button.get_attribute("data-action")?;
    let id = button.get_attribute("data-id")?;
    ListAction::parse(&action, &id)
}
