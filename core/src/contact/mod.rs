//! Contact form.
//!
//! The form is the only part of the site with a lifecycle:
//! visitors fill in four fields, submit once, and see the outcome.
pub mod flow;
pub mod form;
pub mod state;

// Re-exports
pub use flow::submit_and_settle;
pub use form::{ContactForm, Field};
pub use state::{ContactAction, ContactState, SubmissionStatus};
