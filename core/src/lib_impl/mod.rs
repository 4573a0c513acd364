//! Implementations for libraries.
#[cfg(feature = "yew")]
pub mod yew;
