use super::*;
use crate::content::{ContentProvider, PostId, StaticContent};

fn post(id: u32) -> Post {
    StaticContent.post(PostId(id)).unwrap()
}

const TRIGGERS: [DismissTrigger; 4] = [
    DismissTrigger::Backdrop,
    DismissTrigger::CloseButton,
    DismissTrigger::BackAction,
    DismissTrigger::Escape,
];

#[test]
fn default_is_closed() {
    let modal = PostModal::default();
    assert!(!modal.is_open());
    assert!(modal.selected().is_none());
}

#[test]
fn select_post_three_then_close_button() {
    let mut modal = PostModal::default();
    modal.select(post(3));
    assert!(modal.is_open());
    let shown = modal.selected().unwrap();
    assert_eq!(shown.title, "Grounding Techniques for Panic Moments");
    assert_eq!(shown.description, post(3).description);

    assert!(modal.dismiss(DismissTrigger::CloseButton));
    assert!(!modal.is_open());
    assert!(modal.selected().is_none());
}

#[test]
fn every_dismiss_trigger_closes() {
    for trigger in TRIGGERS {
        let mut modal = PostModal::default();
        modal.select(post(1));
        assert!(modal.dismiss(trigger), "{trigger:?} did not close");
        assert_eq!(modal, PostModal::default());
    }
}

#[test]
fn dismissing_closed_modal_is_noop() {
    for trigger in TRIGGERS {
        let mut modal = PostModal::default();
        assert!(!modal.dismiss(trigger));
        assert_eq!(modal, PostModal::default());
    }
}

#[test]
fn double_dismiss_reports_change_once() {
    let mut modal = PostModal::default();
    modal.select(post(2));
    assert!(modal.dismiss(DismissTrigger::Backdrop));
    assert!(!modal.dismiss(DismissTrigger::BackAction));
}

#[test]
fn selecting_while_open_replaces_post() {
    let mut modal = PostModal::default();
    modal.select(post(1));
    modal.select(post(4));
    assert!(modal.is_open());
    assert_eq!(modal.selected().unwrap().id, PostId(4));
}
