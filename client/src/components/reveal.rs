//! Viewport-triggered entrance wrapper.
//!
//! SSR renders the resting (visible) style, so content never depends on the
//! script running. After hydration the section is armed (hidden) only once an
//! `IntersectionObserver` is attached; if the observer cannot be built it
//! settles back to visible. The observer handle lives in the effect's value,
//! so unmounting the section disconnects it and frees its callback.

use leptos::prelude::*;

use crate::state::reveal::{PAGE_ROOT_MARGIN, RevealState, RevealTiming};

/// Root margin used by every [`Reveal`] below the providing component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealMargin(pub &'static str);

/// Fade and lift `children` into place the first time they scroll into view.
#[component]
pub fn Reveal(children: Children, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let margin = use_context::<RevealMargin>().map_or(PAGE_ROOT_MARGIN, |m| m.0);
    let timing = RevealTiming::default().with_delay_ms(delay_ms).with_root_margin(margin);
    let state = RwSignal::new(RevealState::default());
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::observer::{ObserverHandle, observe_once};

        Effect::new(move |handle: Option<Option<ObserverHandle>>| {
            if let Some(Some(handle)) = handle {
                return Some(handle);
            }
            let element = node_ref.get()?;
            if !state.try_update(RevealState::arm).unwrap_or(false) {
                return None;
            }
            let handle = observe_once(&element, timing.root_margin, move || {
                let _ = state.try_update(|s| s.observe(true));
            });
            if handle.is_none() {
                log::debug!("reveal observer unavailable; showing section");
                let _ = state.try_update(RevealState::settle);
            }
            handle
        });
    }

    view! {
        <div node_ref=node_ref class="reveal" style=move || timing.style(state.get())>
            {children()}
        </div>
    }
}
