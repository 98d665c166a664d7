//! Application shell: navigation bar, mobile drawer, content slot, footer.
//!
//! DESIGN
//! ======
//! The drawer state is owned here, once per shell, and is closed whenever
//! the routed path changes so a navigation never leaves the overlay up.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::footer::Footer;
use crate::components::mobile_drawer::MobileDrawer;
use crate::components::nav_bar::NavBar;
use crate::state::drawer::{CloseTrigger, DrawerState};

/// Shell around arbitrary page content.
#[component]
pub fn SiteFrame(children: Children) -> impl IntoView {
    let drawer = RwSignal::new(DrawerState::default());
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if drawer.with_untracked(DrawerState::is_open) {
            drawer.update(|d| {
                d.close(CloseTrigger::RouteChange);
            });
        }
    });

    view! {
        <div class="site">
            <NavBar drawer/>
            <MobileDrawer drawer/>
            <main class="site__main">{children()}</main>
            <Footer/>
        </div>
    }
}

/// Parent route view: the shell with the matched child route in its slot.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <SiteFrame>
            <Outlet/>
        </SiteFrame>
    }
}
