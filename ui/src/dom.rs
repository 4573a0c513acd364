//! Browser helpers.
use crate::{Error, Result};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// The current document.
pub fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(Error::NoDocument)
}

/// Smoothly scrolls the element with the given id into view.
///
/// # Returns
/// `false` if no such element exists, in which case nothing happens.
pub fn scroll_to_anchor(anchor: &str) -> bool {
    let Some(element) = document()
        .ok()
        .and_then(|document| document.get_element_by_id(anchor))
    else {
        tracing::debug!(anchor, "scroll target not found");
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Vertical scroll offset of the window in pixels.
pub fn scroll_offset() -> Result<f64> {
    let window = web_sys::window().ok_or(Error::NoDocument)?;
    Ok(window.scroll_y()?)
}

/// Current calendar year in local time.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
