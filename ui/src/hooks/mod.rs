//! Custom hooks.
pub mod in_view;
pub mod key_down;
pub mod window_scroll;

// Re-exports
pub use in_view::use_in_view;
pub use key_down::use_key_down;
pub use window_scroll::use_window_scroll;
