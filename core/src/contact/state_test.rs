use super::*;
use crate::dev_utils::filled_form;

#[test]
fn submit_should_be_blocked_while_any_field_is_empty() {
    for field in Field::ALL {
        let mut state = ContactState {
            form: filled_form(),
            ..Default::default()
        };
        state.form.set(field, "");

        assert!(!state.can_submit());
        assert!(!state.apply(ContactAction::Submit));
        assert_eq!(SubmissionStatus::Idle, state.status);
        assert_eq!(0, state.attempt);
    }
}

#[test]
fn submit_should_enter_sending_once() {
    let mut state = filled_state();
    assert_eq!(1, state.next_attempt());

    assert!(state.apply(ContactAction::Submit));
    assert_eq!(SubmissionStatus::Sending, state.status);
    assert_eq!(1, state.attempt);

    // duplicate clicks are ignored
    assert!(!state.can_submit());
    assert!(!state.apply(ContactAction::Submit));
    assert_eq!(1, state.attempt);
}

#[test]
fn fields_should_be_locked_while_sending() {
    let mut state = filled_state();
    state.apply(ContactAction::Submit);

    let before = state.form.clone();
    assert!(!state.apply(ContactAction::SetField(Field::Name, "changed".into())));
    assert_eq!(before, state.form);
}

#[test]
fn success_should_clear_fields_then_reset() {
    let mut state = filled_state();
    state.apply(ContactAction::Submit);

    assert!(state.apply(ContactAction::Succeeded(1)));
    assert_eq!(SubmissionStatus::Success, state.status);
    assert_eq!(ContactForm::default(), state.form);
    assert!(state.status.user_message().is_some());

    assert!(state.apply(ContactAction::ResetStatus(1)));
    assert_eq!(SubmissionStatus::Idle, state.status);
    assert!(!state.apply(ContactAction::ResetStatus(1)));
}

#[test]
fn failure_should_keep_fields() {
    let mut state = filled_state();
    let form = state.form.clone();
    state.apply(ContactAction::Submit);

    assert!(state.apply(ContactAction::Failed(1)));
    assert_eq!(SubmissionStatus::Error, state.status);
    assert_eq!(form, state.form);

    // error does not revert on a timer
    assert!(!state.apply(ContactAction::ResetStatus(1)));
    assert_eq!(SubmissionStatus::Error, state.status);

    // retry without retyping
    assert!(state.apply(ContactAction::Submit));
    assert_eq!(2, state.attempt);
}

#[test]
fn outcomes_should_require_sending() {
    let mut state = filled_state();
    assert!(!state.apply(ContactAction::Succeeded(0)));
    assert!(!state.apply(ContactAction::Failed(0)));
    assert!(!state.apply(ContactAction::Succeeded(1)));
    assert_eq!(SubmissionStatus::Idle, state.status);

    state.apply(ContactAction::Submit);
    assert!(!state.apply(ContactAction::Succeeded(7)), "unknown attempt");
    assert_eq!(SubmissionStatus::Sending, state.status);
}

#[test]
fn stale_reset_should_not_clear_later_success() {
    let mut state = filled_state();
    state.apply(ContactAction::Submit);
    state.apply(ContactAction::Succeeded(1));

    state.form = filled_form();
    assert!(state.apply(ContactAction::Submit));
    assert!(state.apply(ContactAction::Succeeded(2)));

    assert!(!state.apply(ContactAction::ResetStatus(1)));
    assert_eq!(SubmissionStatus::Success, state.status);
    assert!(state.apply(ContactAction::ResetStatus(2)));
}

#[test]
fn set_field_should_report_change() {
    let mut state = ContactState::default();
    assert!(state.apply(ContactAction::SetField(Field::Email, "a@b.c".into())));
    assert!(!state.apply(ContactAction::SetField(Field::Email, "a@b.c".into())));
    assert_eq!("a@b.c", state.form.email);
}

#[test]
fn user_messages_should_match_status() {
    assert_eq!(None, SubmissionStatus::Idle.user_message());
    assert_eq!(None, SubmissionStatus::Sending.user_message());
    assert_ne!(
        SubmissionStatus::Success.user_message(),
        SubmissionStatus::Error.user_message()
    );
}

fn filled_state() -> ContactState {
    ContactState {
        form: filled_form(),
        ..Default::default()
    }
}
