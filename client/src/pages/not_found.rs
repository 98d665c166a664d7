//! Notice for paths outside the three site routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="not-found">
            <h1 class="not-found__title">"Page not found."</h1>
            <A href="/" attr:class="not-found__link">"Return home"</A>
        </section>
    }
}
