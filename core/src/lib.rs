//! # Folio Core
//!
//! Content and interaction state for the Folio portfolio site.
//! Everything here is independent of the browser so it can be exercised natively;
//! the `yew` feature plugs the state types into `use_reducer`.
pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod error;
pub mod intake;
pub mod lib_impl;
pub mod navigation;
pub mod showcase;

#[cfg(test)]
pub mod dev_utils;

// Re-exports
pub use config::SiteConfig;
pub use error::{Error, Result};
