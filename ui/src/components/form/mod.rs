//! Form components.
pub mod text_field;

// Re-exports
pub use text_field::TextField;
