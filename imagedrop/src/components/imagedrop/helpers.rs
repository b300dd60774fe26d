//! Small DOM utilities shared by the update logic and the default notifier.

use wasm_bindgen::JsCast;
use web_sys::{File, FileList, HtmlElement};

/// Blocking browser alert, the widget's default notification channel.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Drops focus from whatever element currently holds it, so the region swap
/// does not leave a focus ring on a control that is about to disappear.
pub fn blur_active_element() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(active) = document.active_element() {
            if let Ok(element) = active.dyn_into::<HtmlElement>() {
                element.blur().ok();
            }
        }
    }
}

/// Collects a browser `FileList` into a `Vec` for message passing.
pub fn collect_files(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}
