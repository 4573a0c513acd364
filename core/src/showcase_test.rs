use super::*;
use crate::content::projects;

#[test]
fn select_should_replace_active() {
    let a = projects()[0].id;
    let b = projects()[1].id;

    let mut state = ShowcaseState::default();
    assert!(state.apply(ShowcaseAction::Select(a)));
    assert_eq!(Some(a), state.active);

    assert!(state.apply(ShowcaseAction::Select(b)));
    assert_eq!(Some(b), state.active);
    assert_eq!(Some(&projects()[1]), state.active_project());

    assert!(!state.apply(ShowcaseAction::Select(b)));
}

#[test]
fn dismiss_should_clear_any_selection() {
    for project in projects() {
        let mut state = ShowcaseState::default();
        state.apply(ShowcaseAction::Select(project.id));
        assert!(state.apply(ShowcaseAction::Dismiss));
        assert_eq!(None, state.active);
        assert_eq!(None, state.active_project());
    }

    let mut state = ShowcaseState::default();
    assert!(!state.apply(ShowcaseAction::Dismiss));
}

#[test]
fn unknown_project_should_have_no_content() {
    let mut state = ShowcaseState::default();
    state.apply(ShowcaseAction::Select(ProjectId(404)));
    assert_eq!(None, state.active_project());
}
