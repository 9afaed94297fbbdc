//! Browser bindings for the page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web_sys` lives under this module. The behavior
//! modules at the crate root stay browser-free and are driven from here with
//! values read out of the DOM.

pub mod controller;
pub mod entry;
pub mod intersection;
pub mod listener;
pub mod storage;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::PageError;
use crate::nav::ScrollMotion;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or(PageError::NoDocument)
}

/// First element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, PageError> {
    document
        .query_selector(selector)
        .map_err(|err| PageError::js("query_selector", &err))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| PageError::js("query_selector_all", &err))?;
    Ok((0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// First descendant of `parent` matching `selector`, if any.
pub fn query_in(parent: &Element, selector: &str) -> Result<Option<Element>, PageError> {
    parent
        .query_selector(selector)
        .map_err(|err| PageError::js("query_selector", &err))
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, present: bool) -> Result<(), PageError> {
    element
        .class_list()
        .toggle_with_force(class, present)
        .map(|_| ())
        .map_err(|err| PageError::js("class_list.toggle", &err))
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), PageError> {
    element
        .set_attribute(name, value)
        .map_err(|err| PageError::js("set_attribute", &err))
}

/// Whether the media query currently matches. Unsupported queries read as
/// `false`.
pub fn media_matches(window: &Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(list)) if list.matches())
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Scroll the window to document offset `top`.
pub fn scroll_to(window: &Window, top: f64, motion: ScrollMotion) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(match motion {
        ScrollMotion::Instant => ScrollBehavior::Instant,
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
    });
    window.scroll_to_with_scroll_to_options(&options);
}

/// Rendered height of `element`, or `0` when absent or not an HTML element.
pub fn offset_height(element: Option<&Element>) -> f64 {
    element
        .and_then(|el| el.dyn_ref::<HtmlElement>())
        .map_or(0.0, |el| f64::from(el.offset_height()))
}

/// Create a `<button type="button">` with `class` and `text`.
pub fn create_button(document: &Document, class: &str, text: &str) -> Result<Element, PageError> {
    let button = document
        .create_element("button")
        .map_err(|err| PageError::js("create_element", &err))?;
    set_attribute(&button, "type", "button")?;
    button.set_class_name(class);
    button.set_text_content(Some(text));
    Ok(button)
}
