//! In-page navigation.
use folio_core::navigation::{NavAction, NavState};
use folio_ui::dom;
use yew::prelude::*;

/// Smoothly scrolls to `anchor`.
/// A missing target is logged by [`dom::scroll_to_anchor`] and otherwise ignored.
pub fn scroll_to(anchor: &str) -> bool {
    dom::scroll_to_anchor(anchor)
}

/// Scrolls to `anchor` and closes the mobile menu.
/// A missing anchor only closes the menu.
pub fn navigate(anchor: &str, nav: &UseReducerDispatcher<NavState>) {
    scroll_to(anchor);
    nav.dispatch(NavAction::Navigate(anchor.to_string()));
}
