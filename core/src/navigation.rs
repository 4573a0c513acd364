//! Page sections and navigation state.
use crate::constants;
use std::fmt;

// ***************
// *** Section ***
// ***************

/// Sections of the page, in display order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Section {
    Home,
    About,
    Skills,
    Education,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Education,
        Section::Projects,
        Section::Contact,
    ];

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Html id of the section's element.
    pub fn anchor(&self) -> String {
        anchor_for_label(self.label())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Element id a navigation label points to.
pub fn anchor_for_label(label: &str) -> String {
    label.to_lowercase()
}

// ****************
// *** NavState ***
// ****************

/// Actions available to modify the [`NavState`].
#[derive(Clone, PartialEq, Debug)]
pub enum NavAction {
    /// Opens or closes the mobile menu.
    ToggleMenu,

    CloseMenu,

    /// Navigation to the given anchor was requested.
    /// Whether the anchor exists is irrelevant to the state.
    Navigate(String),

    /// Sets whether the page is scrolled past the compact threshold.
    SetScrolled(bool),
}

/// Navigation bar state.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct NavState {
    pub menu_open: bool,

    /// Page is scrolled past [`SCROLLED_THRESHOLD_PX`](constants::SCROLLED_THRESHOLD_PX).
    pub scrolled: bool,
}

impl NavState {
    /// Applies an action.
    ///
    /// # Returns
    /// Whether the state changed.
    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }

            NavAction::CloseMenu | NavAction::Navigate(_) => {
                std::mem::replace(&mut self.menu_open, false)
            }

            NavAction::SetScrolled(scrolled) => {
                std::mem::replace(&mut self.scrolled, scrolled) != scrolled
            }
        }
    }
}

/// Whether a scroll offset compacts the navigation bar.
pub fn is_scrolled(offset: f64) -> bool {
    offset > constants::SCROLLED_THRESHOLD_PX
}

/// Navigation bar opacity, in percent, for a scroll offset.
/// Interpolates linearly over [`NAV_FADE_RANGE_PX`](constants::NAV_FADE_RANGE_PX)
/// and clamps outside it.
pub fn nav_opacity(offset: f64) -> u8 {
    let progress = (offset / constants::NAV_FADE_RANGE_PX).clamp(0.0, 1.0);
    let span = f64::from(constants::NAV_OPACITY_MAX - constants::NAV_OPACITY_MIN);
    constants::NAV_OPACITY_MIN + (progress * span).round() as u8
}

#[cfg(test)]
#[path = "./navigation_test.rs"]
mod navigation_test;
