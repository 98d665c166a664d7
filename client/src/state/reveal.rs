//! One-shot entrance effect for page sections.
//!
//! A section is rendered in its resting layout until a viewport observer is
//! attached to it. Arming lowers and hides it; the first time it comes into
//! view it latches to [`RevealState::Revealed`] and never goes back, even if
//! it scrolls out again. Without an observer (no script, observer refused)
//! the section simply stays in its resting layout.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const DEFAULT_DURATION_MS: u32 = 800;
pub const DEFAULT_OFFSET_PX: u32 = 30;
/// Home page sections trigger slightly later than the other pages.
pub const HOME_ROOT_MARGIN: &str = "-100px";
pub const PAGE_ROOT_MARGIN: &str = "-50px";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Server render and anything not yet observed: fully visible.
    #[default]
    Unarmed,
    /// Hidden and offset, waiting for the first intersection.
    Pending,
    Revealed,
}

impl RevealState {
    /// An observer is now watching the section. Only an unarmed section is
    /// hidden; returns `true` on that transition.
    pub fn arm(&mut self) -> bool {
        if *self == RevealState::Unarmed {
            *self = RevealState::Pending;
            return true;
        }
        false
    }

    /// Feed one visibility observation. Returns `true` only on the
    /// transition into `Revealed`.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && *self == RevealState::Pending {
            *self = RevealState::Revealed;
            return true;
        }
        false
    }

    /// Skip straight to the resting layout, e.g. when no observer could be
    /// attached after arming.
    pub fn settle(&mut self) {
        *self = RevealState::Revealed;
    }
}

/// Timing and geometry of one reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTiming {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub offset_px: u32,
    pub root_margin: &'static str,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            duration_ms: DEFAULT_DURATION_MS,
            offset_px: DEFAULT_OFFSET_PX,
            root_margin: PAGE_ROOT_MARGIN,
        }
    }
}

impl RevealTiming {
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_root_margin(mut self, root_margin: &'static str) -> Self {
        self.root_margin = root_margin;
        self
    }

    /// Inline style for `state`. Unarmed and revealed sections share the
    /// resting layout (fully opaque, untransformed). Only the move into
    /// `Revealed` is animated; hiding on arm is instant.
    #[must_use]
    pub fn style(&self, state: RevealState) -> String {
        match state {
            RevealState::Unarmed => "opacity:1;transform:none".to_owned(),
            RevealState::Pending => {
                format!("opacity:0;transform:translateY({}px);transition:none", self.offset_px)
            }
            RevealState::Revealed => format!(
                "opacity:1;transform:none;transition:opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms",
                d = self.duration_ms,
                delay = self.delay_ms,
            ),
        }
    }
}
