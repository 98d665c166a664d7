//! Slide-in navigation for narrow screens.
//!
//! Backdrop and panel are emitted from the same `overlay()` match, so they
//! appear and disappear together.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::drawer::{CloseTrigger, DrawerState};
use crate::state::route::SiteRoute;

#[component]
pub fn MobileDrawer(drawer: RwSignal<DrawerState>) -> impl IntoView {
    let close = move |trigger: CloseTrigger| {
        if drawer.with_untracked(DrawerState::is_open) {
            drawer.update(|d| {
                d.close(trigger);
            });
        }
    };

    move || {
        drawer.with(DrawerState::overlay).map(|_overlay| {
            view! {
                <div class="mobile-drawer">
                    <div class="mobile-drawer__backdrop" on:click=move |_| close(CloseTrigger::Backdrop)></div>
                    <aside id="mobile-drawer" class="mobile-drawer__panel" aria-label="Site navigation">
                        <button
                            class="mobile-drawer__close"
                            type="button"
                            title="Close menu"
                            on:click=move |_| close(CloseTrigger::CloseButton)
                        >
                            "✕"
                        </button>
                        <ul class="mobile-drawer__links">
                            {SiteRoute::ALL
                                .into_iter()
                                .map(|route| {
                                    view! {
                                        <li on:click=move |_| close(CloseTrigger::NavLink)>
                                            <A href=route.path() attr:class="mobile-drawer__link">{route.label()}</A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </aside>
                </div>
            }
        })
    }
}
