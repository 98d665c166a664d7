//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::scroll_reset::ScrollReset;
use crate::content::{SharedContent, StaticContent};
use crate::pages::{
    blog::BlogPage,
    contact::ContactPage,
    home::HomePage,
    layout::{Layout, SiteFrame},
    not_found::NotFoundPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the content source and sets up client-side routing. Every page
/// renders inside [`Layout`]; unmatched paths get the same shell around a
/// not-found notice.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content: SharedContent = Arc::new(StaticContent);
    provide_context(content);

    view! {
        <Stylesheet id="leptos" href="/pkg/practice-site.css"/>
        <Title text="Dr. Maya Reynolds, PsyD | Santa Monica Psychologist"/>
        <Meta
            name="description"
            content="Licensed clinical psychologist in Santa Monica offering therapy for anxiety, burnout, and trauma."
        />

        <Router>
            <ScrollReset/>
            <Routes fallback=|| view! { <SiteFrame><NotFoundPage/></SiteFrame> }>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
