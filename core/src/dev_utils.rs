//! Test utilities.
use crate::contact::ContactForm;
use crate::intake::FormIntake;
use crate::{Error, Result};
use fake::faker::internet::raw::SafeEmail;
use fake::faker::lorem::raw::{Paragraph, Sentence};
use fake::faker::name::raw::Name;
use fake::locales::EN;
use fake::Fake;
use std::cell::RefCell;

/// Creates a [`ContactForm`] with every field filled in.
pub fn filled_form() -> ContactForm {
    ContactForm {
        name: Name(EN).fake(),
        email: SafeEmail(EN).fake(),
        subject: Sentence(EN, 2..5).fake(),
        message: Paragraph(EN, 1..3).fake(),
    }
}

#[derive(Clone, Copy, Debug)]
enum Outcome {
    Accept,
    Reject(u16),
    Unreachable,
}

/// [`FormIntake`] with a fixed outcome that records what it received.
#[derive(Debug)]
pub struct MockIntake {
    outcome: Outcome,
    received: RefCell<Vec<ContactForm>>,
}

impl MockIntake {
    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            received: RefCell::new(vec![]),
        }
    }

    pub fn accepting() -> Self {
        Self::new(Outcome::Accept)
    }

    pub fn rejecting(status: u16) -> Self {
        Self::new(Outcome::Reject(status))
    }

    /// Fails every submission with a transport error.
    pub fn unreachable() -> Self {
        Self::new(Outcome::Unreachable)
    }

    pub fn received(&self) -> Vec<ContactForm> {
        self.received.borrow().clone()
    }
}

impl FormIntake for MockIntake {
    async fn submit(&self, form: &ContactForm) -> Result {
        self.received.borrow_mut().push(form.clone());
        match self.outcome {
            Outcome::Accept => Ok(()),
            Outcome::Reject(status) => Err(Error::Rejected(status)),
            Outcome::Unreachable => {
                let err = reqwest::Client::new()
                    .post("unreachable")
                    .send()
                    .await
                    .expect_err("invalid url should not send");

                Err(err.into())
            }
        }
    }
}
