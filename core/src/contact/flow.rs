//! Drives a submission from request to settled status.
use super::form::ContactForm;
use super::state::ContactAction;
use crate::constants::STATUS_RESET_DELAY;
use crate::intake::FormIntake;
use std::future::Future;
use std::time::Duration;

/// Delivers a submission and reports its outcome.
///
/// Must only be called once [`ContactAction::Submit`] was accepted for `attempt`.
/// Dispatches [`ContactAction::Succeeded`] or [`ContactAction::Failed`].
/// On success, waits [`STATUS_RESET_DELAY`] using `sleep`
/// then dispatches [`ContactAction::ResetStatus`].
///
/// # Arguments
/// 1. `intake`: Where the submission is sent.
/// 2. `form`: Values captured when the submission started.
/// 3. `attempt`: Attempt number assigned by the state.
/// 4. `dispatch`: Applies actions to the form state.
/// 5. `sleep`: Timer used for the status reset.
pub async fn submit_and_settle<I, D, S, F>(
    intake: &I,
    form: ContactForm,
    attempt: u64,
    dispatch: D,
    sleep: S,
) where
    I: FormIntake,
    D: Fn(ContactAction),
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    tracing::debug!(attempt, "sending contact submission");
    match intake.submit(&form).await {
        Ok(()) => {
            tracing::info!(attempt, "contact submission delivered");
            dispatch(ContactAction::Succeeded(attempt));
            sleep(STATUS_RESET_DELAY).await;
            dispatch(ContactAction::ResetStatus(attempt));
        }

        Err(err) => {
            tracing::error!(attempt, ?err, "contact submission failed");
            dispatch(ContactAction::Failed(attempt));
        }
    }
}

#[cfg(test)]
#[path = "./flow_test.rs"]
mod flow_test;
