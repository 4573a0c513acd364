//! Side effects triggered by components.
pub mod contact;
pub mod navigation;
