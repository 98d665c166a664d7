//! Scroll the window to the top whenever the routed path changes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::scroll::scroll_to_top;

/// Renders nothing. Must be mounted inside the `<Router>`.
#[component]
pub fn ScrollReset() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        #[cfg(feature = "hydrate")]
        {
            log::debug!("route committed: {path}");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = path;
        scroll_to_top();
    });
}
