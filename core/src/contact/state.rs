//! Contact form state.
use super::form::{ContactForm, Field};

// ************************
// *** SubmissionStatus ***
// ************************

/// Lifecycle of a submission.
///
/// `Idle -> Sending -> (Success | Error)`, with `Success` reverting to `Idle`
/// after a delay. `Sending` is never skipped.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Feedback shown to the visitor, if any.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Sending => None,
            Self::Success => Some("Message sent successfully! I'll get back to you soon."),
            Self::Error => {
                Some("Something went wrong. Please try again or contact me directly via email.")
            }
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

// ********************
// *** ContactState ***
// ********************

/// Actions available to modify the [`ContactState`].
#[derive(Clone, PartialEq, Debug)]
pub enum ContactAction {
    /// Sets a field's value.
    SetField(Field, String),

    /// Begins a submission.
    Submit,

    /// The given attempt was accepted by the intake.
    Succeeded(u64),

    /// The given attempt failed.
    Failed(u64),

    /// Reverts the success status of the given attempt.
    ResetStatus(u64),
}

/// Contact form values and submission status.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmissionStatus,

    /// Number of submissions started.
    /// Identifies the attempt outcomes belong to.
    pub attempt: u64,
}

impl ContactState {
    /// Whether a [`ContactAction::Submit`] would start a submission.
    pub fn can_submit(&self) -> bool {
        !self.status.is_sending() && self.form.is_complete()
    }

    /// Attempt number the next accepted submission will receive.
    pub fn next_attempt(&self) -> u64 {
        self.attempt + 1
    }

    /// Applies an action.
    ///
    /// # Returns
    /// Whether the state changed.
    /// Actions that do not fit the current status are ignored.
    pub fn apply(&mut self, action: ContactAction) -> bool {
        match action {
            ContactAction::SetField(field, value) => {
                if self.status.is_sending() || self.form.get(field) == value {
                    return false;
                }

                self.form.set(field, value);
            }

            ContactAction::Submit => {
                if !self.can_submit() {
                    tracing::debug!(status = ?self.status, missing = ?self.form.missing_fields(), "submission blocked");
                    return false;
                }

                self.attempt += 1;
                self.status = SubmissionStatus::Sending;
            }

            ContactAction::Succeeded(attempt) => {
                if !self.is_pending(attempt) {
                    return false;
                }

                self.status = SubmissionStatus::Success;
                self.form.clear();
            }

            ContactAction::Failed(attempt) => {
                if !self.is_pending(attempt) {
                    return false;
                }

                self.status = SubmissionStatus::Error;
            }

            ContactAction::ResetStatus(attempt) => {
                if self.status != SubmissionStatus::Success || self.attempt != attempt {
                    return false;
                }

                self.status = SubmissionStatus::Idle;
            }
        }

        true
    }

    fn is_pending(&self, attempt: u64) -> bool {
        self.status.is_sending() && self.attempt == attempt
    }
}

#[cfg(test)]
#[path = "./state_test.rs"]
mod state_test;
