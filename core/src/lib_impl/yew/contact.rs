//! [`yew`] implementations for the contact form.
use crate::contact::{ContactAction, ContactState};
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = (*self).clone();
        if current.apply(action) {
            current.into()
        } else {
            self
        }
    }
}

#[cfg(test)]
#[path = "./contact_test.rs"]
mod contact_test;
