//! Constant values.
use std::time::Duration;

/// Time a successful submission's status stays visible before reverting to idle.
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(5);

/// Scroll offset, in pixels, past which the navigation bar compacts.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Scroll offset, in pixels, over which the navigation bar fades
/// from [`NAV_OPACITY_MIN`] to [`NAV_OPACITY_MAX`].
pub const NAV_FADE_RANGE_PX: f64 = 100.0;

/// Navigation bar opacity at the top of the page, in percent.
pub const NAV_OPACITY_MIN: u8 = 80;

/// Navigation bar opacity once fully faded in, in percent.
pub const NAV_OPACITY_MAX: u8 = 95;

/// Placeholder form intake endpoint.
/// Replace at build time with `FOLIO_INTAKE_ENDPOINT`.
pub const DEFAULT_INTAKE_ENDPOINT: &str = "https://formspree.io/f/your-form-id";

/// Number of technologies shown on a project card before collapsing the rest.
pub const CARD_TECH_PREVIEW: usize = 3;
