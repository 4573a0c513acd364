//! Contact form submission.
use folio_core::contact::{submit_and_settle, ContactAction, ContactForm, ContactState};
use folio_core::intake::HttpIntake;
use folio_core::SiteConfig;
use gloo_timers::future::sleep;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Sends a submission in the background.
///
/// Must be called after [`ContactAction::Submit`] was dispatched for `attempt`.
///
/// ```mermaid
/// stateDiagram-v2
///     [*] --> Idle
///     Idle --> Sending: submit, all fields filled
///     Error --> Sending: submit
///     Success --> Sending: submit, all fields filled
///     Sending --> Success: 2xx, fields cleared
///     Sending --> Error: rejected or unreachable
///     Success --> Idle: after 5 s
/// ```
pub fn send_contact(
    config: Option<Rc<SiteConfig>>,
    form: ContactForm,
    attempt: u64,
    state: UseReducerDispatcher<ContactState>,
) {
    spawn_local(async move {
        let dispatch = move |action: ContactAction| state.dispatch(action);
        let Some(config) = config else {
            tracing::error!(attempt, "no site configuration, cannot submit");
            dispatch(ContactAction::Failed(attempt));
            return;
        };

        let intake = HttpIntake::from_config(&config);
        submit_and_settle(&intake, form, attempt, dispatch, sleep).await;
    });
}
