//! Blog reader modal: `closed` or `open(post)`.
//!
//! DESIGN
//! ======
//! Holds the selected post by value so the reader never depends on the
//! provider still listing it. Every dismissal path funnels through
//! [`PostModal::dismiss`], which makes them equivalent and idempotent.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::content::Post;

/// What closed the reader. Only used for logging; all triggers behave alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    Backdrop,
    CloseButton,
    BackAction,
    Escape,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostModal {
    selected: Option<Post>,
}

impl PostModal {
    /// Show `post`. If another post is showing it is replaced in place,
    /// without passing through `closed`.
    pub fn select(&mut self, post: Post) {
        self.selected = Some(post);
    }

    /// Close the reader. Returns `false` when it was already closed.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        let changed = self.selected.take().is_some();
        #[cfg(feature = "hydrate")]
        {
            if changed {
                log::debug!("post reader dismissed via {trigger:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = trigger;
        changed
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Post> {
        self.selected.as_ref()
    }
}
