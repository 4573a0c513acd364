//! UI Components
pub mod form;
pub mod icon;
pub mod page_overlay;
pub mod progress_bar;
pub mod reveal;
pub mod section_header;

// Re-exports
pub use form::TextField;
pub use icon::ContentIcon;
pub use page_overlay::PageOverlay;
pub use progress_bar::ProgressBar;
pub use reveal::{Reveal, RevealFrom};
pub use section_header::SectionHeader;
