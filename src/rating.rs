//! Star Rating
//!
//! Projects the selected rating onto the `label[for="rating-<n>"]` stars.
//! Every change re-renders all labels: stars up to the rating get the
//! selected class, the rest the unselected one.

use dom_listeners::ListenerSet;
use leptos::prelude::Effect;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config::{PageConfig, StarStyles};
use crate::dom;
use crate::store::{store_rating, store_set_rating, PageStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarStyle {
    Selected,
    Unselected,
}

/// Leading decimal digits of `s`, like `parseInt(s, 10)`
fn parse_leading_int(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Star index encoded in a label's `for` attribute (`rating-3` -> 3)
pub fn parse_star_index(for_attr: &str) -> Option<u32> {
    for_attr.split('-').nth(1).and_then(parse_leading_int)
}

/// Rating from the pre-checked radio value, 0 without a usable one
pub fn initial_rating(checked_value: Option<&str>) -> u32 {
    checked_value.and_then(parse_leading_int).unwrap_or(0)
}

/// Rating after a click on the label with the given `for` attribute
pub fn rating_for_click(for_attr: &str) -> u32 {
    parse_star_index(for_attr).unwrap_or(0)
}

/// Labels whose index does not parse never render as selected
pub fn star_style(index: Option<u32>, rating: u32) -> StarStyle {
    match index {
        Some(i) if i <= rating => StarStyle::Selected,
        _ => StarStyle::Unselected,
    }
}

fn label_index(label: &Element) -> Option<u32> {
    label.get_attribute("for").as_deref().and_then(parse_star_index)
}

/// Classes to (add, remove) for a label
pub fn star_classes(index: Option<u32>, rating: u32, styles: &StarStyles) -> (&str, &str) {
    match star_style(index, rating) {
        StarStyle::Selected => (&styles.selected, &styles.unselected),
        StarStyle::Unselected => (&styles.unselected, &styles.selected),
    }
}

pub fn render(labels: &[Element], styles: &StarStyles, rating: u32) {
    for label in labels {
        let (on, off) = star_classes(label_index(label), rating, styles);
        dom::swap_class(label, on, off);
    }
}

fn checked_value(document: &Document, selector: &str) -> Option<String> {
    let input = dom::query_one(document, selector)?;
    input.get_attribute("value")
}

/// Bind the rating labels and render the initial selection
pub fn bind(
    document: &Document,
    config: &Rc<PageConfig>,
    store: PageStore,
    listeners: &mut ListenerSet,
) -> Result<(), JsValue> {
    let labels = dom::query_all(document, &config.selectors.rating_labels);
    if labels.is_empty() {
        log::debug!("[RATING] no rating widget on this page");
        return Ok(());
    }

    for label in &labels {
        let for_attr = label.get_attribute("for").unwrap_or_default();
        listeners.bind(label, "click", move |_| {
            store_set_rating(&store, rating_for_click(&for_attr));
        })?;
    }

    let initial = initial_rating(checked_value(document, &config.selectors.rating_checked).as_deref());
    store_set_rating(&store, initial);
    log::debug!("[RATING] {} stars, initial rating {}", labels.len(), initial);

    let selector = config.selectors.rating_labels.clone();
    let styles = config.stars.clone();
    Effect::new(move |_| {
        let rating = store_rating(&store);
        if let Some(document) = dom::document() {
            render(&dom::query_all(&document, &selector), &styles, rating);
        }
    });

    Ok(())
}
