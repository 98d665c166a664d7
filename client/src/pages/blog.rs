//! Insights page: header, post grid, reader modal, newsletter block.
//!
//! DESIGN
//! ======
//! The page owns the reader state (`PostModal`) and the scroll lock that
//! accompanies it. The lock is scoped to this page's owner, so it is
//! released when the reader closes and, failing that, when the page itself
//! is torn down.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::post_modal::PostReader;
use crate::components::reveal::Reveal;
use crate::content::practice::BLOG_HEADER_IMAGE;
use crate::content::{PostId, use_content};
use crate::state::modal::{DismissTrigger, PostModal};
use crate::util::scroll::ScopedScrollLock;

#[component]
pub fn BlogPage() -> impl IntoView {
    let content = use_content();
    let posts = content.posts();
    let modal = RwSignal::new(PostModal::default());
    let scroll_lock = ScopedScrollLock::new();

    Effect::new(move || {
        scroll_lock.sync(modal.with(PostModal::is_open));
    });

    let on_select = Callback::new(move |id: PostId| {
        let Some(post) = content.post(id) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            log::debug!("opening post {id}");
        }
        modal.update(|m| m.select(post));
    });
    let on_dismiss = Callback::new(move |trigger: DismissTrigger| {
        if modal.with_untracked(PostModal::is_open) {
            modal.update(|m| {
                m.dismiss(trigger);
            });
        }
    });

    view! {
        <section class="blog-header">
            <div class="blog-header__media blog-header__media--enter-left">
                <div class="blog-header__arch">
                    <img class="blog-header__image" src=BLOG_HEADER_IMAGE alt="Journaling"/>
                </div>
            </div>
            <div class="blog-header__copy blog-header__copy--enter-right">
                <h1 class="blog-header__title">"Insights & Resources"</h1>
                <p class="blog-header__lead">
                    "A collection of thoughts on healing, anxiety, and finding balance in a fast-paced world."
                </p>
            </div>
        </section>

        <section class="blog-grid">
            {posts
                .into_iter()
                .map(|post| {
                    view! {
                        <Reveal>
                            <PostCard post on_select/>
                        </Reveal>
                    }
                })
                .collect_view()}
        </section>

        <section class="subscribe">
            <Reveal>
                <div class="subscribe__box">
                    <h2 class="subscribe__title">"Stay Connected"</h2>
                    <p class="subscribe__copy">"Sign up to receive monthly insights and practice updates."</p>
                    <div class="subscribe__form">
                        <input class="subscribe__input" type="email" placeholder="Email Address"/>
                        <button class="subscribe__button" type="button">"Subscribe"</button>
                    </div>
                    <p class="subscribe__note">"Respecting your inbox and your privacy."</p>
                </div>
            </Reveal>
        </section>

        {move || {
            modal
                .with(|m| m.selected().cloned())
                .map(|post| view! { <PostReader post on_dismiss/> })
        }}
    }
}
