use super::*;
use crate::contact::SubmissionStatus;
use crate::dev_utils::filled_form;

#[test]
fn ignored_action_should_keep_instance() {
    let state = Rc::new(ContactState::default());
    let next = state.clone().reduce(ContactAction::Submit);
    assert!(Rc::ptr_eq(&state, &next));
}

#[test]
fn applied_action_should_produce_new_state() {
    let state = Rc::new(ContactState {
        form: filled_form(),
        ..Default::default()
    });

    let next = state.clone().reduce(ContactAction::Submit);
    assert!(!Rc::ptr_eq(&state, &next));
    assert_eq!(SubmissionStatus::Sending, next.status);
    assert_eq!(SubmissionStatus::Idle, state.status);
}
