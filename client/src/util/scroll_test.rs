#![cfg(not(feature = "hydrate"))]

use leptos::prelude::Owner;

use super::*;
use crate::content::{ContentProvider, PostId, StaticContent};
use crate::state::modal::{DismissTrigger, PostModal};

fn body_overflow() -> Option<String> {
    let current = swap_body_overflow(None);
    let _ = swap_body_overflow(current.as_deref());
    current
}

fn set_body_overflow(value: Option<&str>) {
    let _ = swap_body_overflow(value);
}

#[test]
fn scroll_to_top_is_noop_but_callable() {
    scroll_to_top();
}

#[test]
fn acquire_hides_overflow() {
    let lock = ScrollLock::acquire();
    assert_eq!(body_overflow().as_deref(), Some("hidden"));
    drop(lock);
}

#[test]
fn drop_clears_overflow_when_none_was_set() {
    set_body_overflow(None);
    let lock = ScrollLock::acquire();
    drop(lock);
    assert_eq!(body_overflow(), None);
}

#[test]
fn drop_restores_previous_inline_overflow() {
    set_body_overflow(Some("scroll"));
    let lock = ScrollLock::acquire();
    assert_eq!(body_overflow().as_deref(), Some("hidden"));
    drop(lock);
    assert_eq!(body_overflow().as_deref(), Some("scroll"));
}

#[test]
fn sync_acquires_when_locked() {
    let mut slot = None;
    assert!(sync_scroll_lock(&mut slot, true));
    assert!(slot.is_some());
    assert_eq!(body_overflow().as_deref(), Some("hidden"));
}

#[test]
fn sync_is_idempotent_while_locked() {
    let mut slot = None;
    sync_scroll_lock(&mut slot, true);
    assert!(!sync_scroll_lock(&mut slot, true));
    assert!(slot.is_some());
}

#[test]
fn sync_releases_when_unlocked() {
    set_body_overflow(Some("auto"));
    let mut slot = None;
    sync_scroll_lock(&mut slot, true);
    assert!(sync_scroll_lock(&mut slot, false));
    assert!(slot.is_none());
    assert_eq!(body_overflow().as_deref(), Some("auto"));
}

#[test]
fn sync_release_on_empty_slot_is_noop() {
    let mut slot: Option<ScrollLock> = None;
    assert!(!sync_scroll_lock(&mut slot, false));
    assert!(slot.is_none());
}

#[test]
fn every_dismiss_path_restores_scrolling() {
    let post = StaticContent.post(PostId(2)).unwrap();
    for trigger in [
        DismissTrigger::Backdrop,
        DismissTrigger::CloseButton,
        DismissTrigger::BackAction,
        DismissTrigger::Escape,
    ] {
        set_body_overflow(Some("auto"));
        let mut modal = PostModal::default();
        let mut slot = None;

        modal.select(post.clone());
        sync_scroll_lock(&mut slot, modal.is_open());
        assert_eq!(body_overflow().as_deref(), Some("hidden"), "{trigger:?}");

        assert!(modal.dismiss(trigger));
        sync_scroll_lock(&mut slot, modal.is_open());
        assert_eq!(body_overflow().as_deref(), Some("auto"), "{trigger:?}");
    }
}

#[test]
fn scoped_lock_syncs_like_a_slot() {
    set_body_overflow(None);
    let owner = Owner::new();
    owner.with(|| {
        let lock = ScopedScrollLock::new();
        assert!(lock.sync(true));
        assert!(!lock.sync(true));
        assert_eq!(body_overflow().as_deref(), Some("hidden"));
        assert!(lock.sync(false));
        assert_eq!(body_overflow(), None);
    });
}

#[test]
fn owner_teardown_with_reader_open_releases_lock() {
    set_body_overflow(Some("auto"));
    let owner = Owner::new();
    let lock = owner.with(|| {
        let lock = ScopedScrollLock::new();
        lock.sync(true);
        lock
    });
    assert_eq!(body_overflow().as_deref(), Some("hidden"));

    owner.cleanup();
    assert_eq!(body_overflow().as_deref(), Some("auto"));
    assert!(!lock.sync(false));
}

#[test]
fn owner_teardown_after_release_leaves_overflow_alone() {
    set_body_overflow(Some("auto"));
    let owner = Owner::new();
    owner.with(|| {
        let lock = ScopedScrollLock::new();
        lock.sync(true);
        lock.sync(false);
    });
    set_body_overflow(Some("clip"));

    owner.cleanup();
    assert_eq!(body_overflow().as_deref(), Some("clip"));
}
