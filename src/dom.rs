//! DOM Helpers

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::js_error_message;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// All elements matching `selector`, empty on an invalid selector
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[DOM] invalid selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Add `on` and remove `off` from the element's classes
pub fn swap_class(element: &Element, on: &str, off: &str) {
    let classes = element.class_list();
    if let Err(e) = classes.add_1(on).and_then(|_| classes.remove_1(off)) {
        log::warn!("[DOM] invalid class {:?} / {:?}: {}", on, off, js_error_message(&e));
    }
}

/// Force `class` on or off
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("[DOM] invalid class {:?}: {}", class, js_error_message(&e));
    }
}
