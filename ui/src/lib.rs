//! Reusable components and hooks for the Folio site.
pub mod components;
pub mod dom;
pub mod error;
pub mod hooks;

// Re-exports
pub use error::{Error, Result};
