pub mod calendar;
pub mod events;
pub mod login;
pub mod not_found;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::NodeRef;

pub(crate) fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|el| el.value())
        .unwrap_or_default()
}

pub(crate) fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>()
        .map(|el| el.value())
        .unwrap_or_default()
}

pub(crate) fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|el| el.value())
        .unwrap_or_default()
}

pub(crate) fn checkbox_checked(node: &NodeRef) -> bool {
    node.cast::<HtmlInputElement>()
        .map(|el| el.checked())
        .unwrap_or(false)
}
