//! Window scroll reset and the background scroll lock.
//!
//! DESIGN
//! ======
//! The lock is a guard value, not a global flag: [`ScrollLock::acquire`]
//! remembers the `<body>` overflow it replaced and `Drop` puts it back.
//! Whoever owns the guard owns the lock, so every exit path (dismissal,
//! unmount, panic unwinding) releases it.
//!
//! Outside the browser the overflow lives in a thread-local stand-in for
//! `<body>`, so acquire/restore behaves the same on every build.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::*;

/// Jump the window to the top-left corner.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Suppresses page scrolling for as long as it is alive.
#[derive(Debug)]
pub struct ScrollLock {
    previous_overflow: Option<String>,
}

impl ScrollLock {
    /// Set `overflow: hidden` on `<body>`, remembering the prior value.
    #[must_use]
    pub fn acquire() -> Self {
        Self { previous_overflow: swap_body_overflow(Some("hidden")) }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let _ = swap_body_overflow(self.previous_overflow.as_deref());
    }
}

/// Make `slot` hold a lock exactly when `locked` is true.
///
/// Returns `true` if a lock was acquired or released.
pub fn sync_scroll_lock(slot: &mut Option<ScrollLock>, locked: bool) -> bool {
    match (locked, slot.is_some()) {
        (true, false) => {
            *slot = Some(ScrollLock::acquire());
            true
        }
        (false, true) => {
            slot.take();
            true
        }
        _ => false,
    }
}

/// A lock slot tied to the current reactive owner.
///
/// Cleaning up the owner (the page unmounting) releases a held lock even
/// if nothing ever synced it back to unlocked.
#[derive(Clone, Copy, Debug)]
pub struct ScopedScrollLock {
    slot: StoredValue<Option<ScrollLock>>,
}

impl ScopedScrollLock {
    /// Create an empty slot under the current owner.
    #[must_use]
    pub fn new() -> Self {
        let slot = StoredValue::new(None::<ScrollLock>);
        on_cleanup(move || {
            let _ = slot.try_update_value(Option::take);
        });
        Self { slot }
    }

    /// See [`sync_scroll_lock`]. A disposed slot reports no change.
    pub fn sync(self, locked: bool) -> bool {
        self.slot.try_update_value(|slot| sync_scroll_lock(slot, locked)).unwrap_or(false)
    }
}

impl Default for ScopedScrollLock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static DETACHED_BODY_OVERFLOW: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

/// Replace the body's inline `overflow`, returning the old value.
/// `None` clears the property.
fn swap_body_overflow(next: Option<&str>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let style = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.style())?;
        let previous = style
            .get_property_value("overflow")
            .ok()
            .filter(|value| !value.is_empty());
        let _ = match next {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        };
        previous
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DETACHED_BODY_OVERFLOW.with_borrow_mut(|slot| std::mem::replace(slot, next.map(str::to_owned)))
    }
}
