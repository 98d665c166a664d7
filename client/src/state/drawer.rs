//! Mobile navigation drawer.
//!
//! The backdrop and the slide-in panel are one unit: both are rendered from
//! the single [`DrawerOverlay`] token returned by [`DrawerState::overlay`].

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

/// What closed the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    NavLink,
    RouteChange,
}

/// Proof that the drawer is open; the only way to render backdrop + panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawerOverlay;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    /// Menu button. Returns `false` if the drawer was already open.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Any dismissal path. Returns `false` if the drawer was already closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        let changed = std::mem::replace(&mut self.open, false);
        #[cfg(feature = "hydrate")]
        {
            if changed {
                log::debug!("drawer closed via {trigger:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = trigger;
        changed
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn overlay(&self) -> Option<DrawerOverlay> {
        if self.open { Some(DrawerOverlay) } else { None }
    }
}
