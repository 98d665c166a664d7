//! Sticky top navigation.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::content::practice::PRACTITIONER;
use crate::state::drawer::DrawerState;
use crate::state::route::SiteRoute;

/// Brand link, desktop links, and the mobile menu button that opens `drawer`.
///
/// The link for the page being shown carries `site-nav__link--active`.
#[component]
pub fn NavBar(drawer: RwSignal<DrawerState>) -> impl IntoView {
    let location = use_location();
    let current = Memo::new(move |_| SiteRoute::from_path(&location.pathname.get()));
    let on_menu = move |_| {
        if !drawer.with_untracked(DrawerState::is_open) {
            drawer.update(|d| {
                d.open();
            });
        }
    };

    view! {
        <nav class="site-nav">
            <A href="/" attr:class="site-nav__brand">{PRACTITIONER}</A>
            <div class="site-nav__links">
                {SiteRoute::ALL
                    .into_iter()
                    .map(|route| {
                        let class = move || route.nav_class(current.get());
                        view! { <A href=route.path() attr:class=class>{route.label()}</A> }
                    })
                    .collect_view()}
            </div>
            <button
                class="site-nav__menu"
                type="button"
                aria-controls="mobile-drawer"
                aria-expanded=move || if drawer.with(DrawerState::is_open) { "true" } else { "false" }
                on:click=on_menu
            >
                "Menu"
            </button>
        </nav>
    }
}
