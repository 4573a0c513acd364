//! [`yew`] implementations for the project overlay.
use crate::showcase::{ShowcaseAction, ShowcaseState};
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for ShowcaseState {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = *self;
        if current.apply(action) {
            current.into()
        } else {
            self
        }
    }
}
