use super::*;
use crate::contact::{ContactState, SubmissionStatus};
use crate::dev_utils::{filled_form, MockIntake};
use std::cell::RefCell;
use tokio::time::{self, Instant};

#[tokio::test(start_paused = true)]
async fn success_should_reset_status_after_delay() {
    let state = RefCell::new(ContactState {
        form: filled_form(),
        ..Default::default()
    });
    let intake = MockIntake::accepting();

    let attempt = state.borrow().next_attempt();
    assert!(state.borrow_mut().apply(ContactAction::Submit));
    let form = state.borrow().form.clone();

    let start = Instant::now();
    let dispatch = |action| {
        state.borrow_mut().apply(action);
    };

    let probe = async {
        time::sleep(STATUS_RESET_DELAY - Duration::from_millis(100)).await;
        let current = state.borrow().clone();
        assert_eq!(SubmissionStatus::Success, current.status);
        assert_eq!(ContactForm::default(), current.form, "fields should be cleared");

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(SubmissionStatus::Idle, state.borrow().status);
    };

    tokio::join!(
        submit_and_settle(&intake, form.clone(), attempt, dispatch, time::sleep),
        probe
    );

    assert!(start.elapsed() >= STATUS_RESET_DELAY);
    assert_eq!(vec![form], intake.received());
}

#[tokio::test(start_paused = true)]
async fn failure_should_keep_fields_without_timer() {
    let state = RefCell::new(ContactState {
        form: filled_form(),
        ..Default::default()
    });
    let intake = MockIntake::rejecting(500);

    let attempt = state.borrow().next_attempt();
    state.borrow_mut().apply(ContactAction::Submit);
    let form = state.borrow().form.clone();

    let slept = RefCell::new(false);
    let sleep = |d: Duration| {
        *slept.borrow_mut() = true;
        time::sleep(d)
    };

    submit_and_settle(
        &intake,
        form.clone(),
        attempt,
        |action| {
            state.borrow_mut().apply(action);
        },
        sleep,
    )
    .await;

    let current = state.borrow();
    assert_eq!(SubmissionStatus::Error, current.status);
    assert_eq!(form, current.form);
    assert!(!*slept.borrow(), "no reset timer on failure");
    assert_eq!(1, intake.received().len(), "single attempt");
}

#[tokio::test(start_paused = true)]
async fn transport_failure_should_report_error() {
    let state = RefCell::new(ContactState {
        form: filled_form(),
        ..Default::default()
    });
    let intake = MockIntake::unreachable();

    let attempt = state.borrow().next_attempt();
    state.borrow_mut().apply(ContactAction::Submit);
    let form = state.borrow().form.clone();

    submit_and_settle(
        &intake,
        form,
        attempt,
        |action| {
            state.borrow_mut().apply(action);
        },
        time::sleep,
    )
    .await;

    assert_eq!(SubmissionStatus::Error, state.borrow().status);
}

#[tokio::test(start_paused = true)]
async fn actions_should_be_dispatched_in_order() {
    let actions = RefCell::new(Vec::new());
    let intake = MockIntake::accepting();

    submit_and_settle(
        &intake,
        filled_form(),
        3,
        |action| actions.borrow_mut().push(action),
        time::sleep,
    )
    .await;

    assert_eq!(
        vec![ContactAction::Succeeded(3), ContactAction::ResetStatus(3)],
        actions.into_inner()
    );
}
