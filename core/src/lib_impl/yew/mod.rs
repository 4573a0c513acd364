//! [`yew`] implementations.
//!
//! State types become reducers; an action that leaves the state unchanged
//! hands back the same `Rc` so components do not re-render.
mod contact;
mod content;
mod navigation;
mod showcase;
