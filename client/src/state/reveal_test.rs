use super::*;

fn armed() -> RevealState {
    let mut state = RevealState::default();
    assert!(state.arm());
    state
}

#[test]
fn starts_unarmed_and_visible() {
    let state = RevealState::default();
    assert_eq!(state, RevealState::Unarmed);
}

#[test]
fn arming_hides_once() {
    let mut state = RevealState::default();
    assert!(state.arm());
    assert!(!state.arm());
    assert_eq!(state, RevealState::Pending);
}

#[test]
fn observation_before_arming_is_ignored() {
    let mut state = RevealState::default();
    assert!(!state.observe(true));
    assert_eq!(state, RevealState::Unarmed);
}

#[test]
fn first_intersection_reveals() {
    let mut state = armed();
    assert!(state.observe(true));
    assert_eq!(state, RevealState::Revealed);
}

#[test]
fn non_intersecting_observation_keeps_pending() {
    let mut state = armed();
    assert!(!state.observe(false));
    assert_eq!(state, RevealState::Pending);
}

#[test]
fn reveal_is_one_shot() {
    let mut state = armed();
    state.observe(true);
    assert!(!state.observe(false));
    assert!(!state.observe(true));
    assert!(!state.arm());
    assert_eq!(state, RevealState::Revealed);
}

#[test]
fn settle_shows_an_armed_section_without_observer() {
    let mut state = armed();
    state.settle();
    assert_eq!(state, RevealState::Revealed);
    assert!(!state.arm());
}

#[test]
fn default_timing_matches_page_sections() {
    let timing = RevealTiming::default();
    assert_eq!(timing.duration_ms, 800);
    assert_eq!(timing.offset_px, 30);
    assert_eq!(timing.delay_ms, 0);
    assert_eq!(timing.root_margin, "-50px");
}

#[test]
fn builders_override_delay_and_margin() {
    let timing = RevealTiming::default().with_delay_ms(200).with_root_margin(HOME_ROOT_MARGIN);
    assert_eq!(timing.delay_ms, 200);
    assert_eq!(timing.root_margin, "-100px");
}

#[test]
fn unarmed_style_is_resting_layout() {
    let style = RevealTiming::default().style(RevealState::Unarmed);
    assert_eq!(style, "opacity:1;transform:none");
}

#[test]
fn pending_style_is_hidden_and_offset_without_transition() {
    let style = RevealTiming::default().style(RevealState::Pending);
    assert!(style.starts_with("opacity:0;transform:translateY(30px);"));
    assert!(style.ends_with("transition:none"));
}

#[test]
fn revealed_style_is_resting_state_with_delay() {
    let style = RevealTiming::default().with_delay_ms(100).style(RevealState::Revealed);
    assert!(style.starts_with("opacity:1;transform:none;"));
    assert!(style.contains("opacity 800ms ease-out 100ms"));
}
