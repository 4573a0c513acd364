//! [`yew`] implementations for navigation.
use crate::navigation::{NavAction, NavState};
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = (*self).clone();
        if current.apply(action) {
            current.into()
        } else {
            self
        }
    }
}
