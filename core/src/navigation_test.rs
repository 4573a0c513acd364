use super::*;

#[test]
fn anchors_should_be_lowercased_labels() {
    let anchors = Section::ALL.map(|section| section.anchor());
    assert_eq!(
        ["home", "about", "skills", "education", "projects", "contact"],
        anchors
    );

    assert_eq!("blog", anchor_for_label("Blog"));
    assert_eq!("mixedcase", anchor_for_label("MixedCase"));
}

#[test]
fn sections_should_be_in_page_order() {
    let labels = Section::ALL.map(|section| section.label());
    assert_eq!(
        ["Home", "About", "Skills", "Education", "Projects", "Contact"],
        labels
    );
}

#[test]
fn toggle_menu_should_flip() {
    let mut state = NavState::default();
    assert!(state.apply(NavAction::ToggleMenu));
    assert!(state.menu_open);
    assert!(state.apply(NavAction::ToggleMenu));
    assert!(!state.menu_open);
}

#[test]
fn navigate_should_only_close_menu() {
    let mut state = NavState {
        menu_open: true,
        scrolled: true,
    };

    assert!(state.apply(NavAction::Navigate("projects".into())));
    assert_eq!(
        NavState {
            menu_open: false,
            scrolled: true
        },
        state
    );

    // missing target
    let mut state = NavState {
        menu_open: true,
        scrolled: false,
    };
    state.apply(NavAction::Navigate(anchor_for_label("Nowhere")));
    assert_eq!(NavState::default(), state);

    // already closed
    assert!(!state.apply(NavAction::Navigate("home".into())));
    assert_eq!(NavState::default(), state);
}

#[test]
fn set_scrolled_should_report_change() {
    let mut state = NavState::default();
    assert!(!state.apply(NavAction::SetScrolled(false)));
    assert!(state.apply(NavAction::SetScrolled(true)));
    assert!(!state.apply(NavAction::SetScrolled(true)));
    assert!(state.scrolled);
    assert!(!state.menu_open);
}

#[test]
fn scroll_threshold_should_work() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
}

#[test]
fn nav_opacity_should_fade_over_range() {
    assert_eq!(80, nav_opacity(0.0));
    assert_eq!(80, nav_opacity(-20.0), "overscroll clamps");
    assert_eq!(88, nav_opacity(50.0));
    assert_eq!(95, nav_opacity(100.0));
    assert_eq!(95, nav_opacity(2_000.0));

    let mut previous = nav_opacity(0.0);
    for offset in (0..=100).map(f64::from) {
        let opacity = nav_opacity(offset);
        assert!(opacity >= previous, "fade should never reverse");
        previous = opacity;
    }
}
