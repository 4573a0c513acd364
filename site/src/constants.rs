//! Constant values.

/// Delay between consecutive items of a revealed list.
pub static STAGGER_MS: u32 = 100;

/// Delay between consecutive skills within a category.
pub static SKILL_STAGGER_MS: u32 = 50;

/// Id of the element the app is mounted in.
pub static APP_ID: &str = "folio";
