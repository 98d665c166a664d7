//! Full-article reader shown over the insights grid.

use leptos::prelude::*;

use crate::content::Post;
use crate::state::modal::DismissTrigger;

/// Modal reader for one post. Backdrop click, the close button, the back
/// link and Escape all report through `on_dismiss`.
#[component]
pub fn PostReader(post: Post, on_dismiss: Callback<DismissTrigger>) -> impl IntoView {
    let Post { date, title, image_url, description, .. } = post;
    let alt = title.clone();
    let dialog_ref = NodeRef::<leptos::html::Article>::new();
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_dismiss.run(DismissTrigger::Escape);
        }
    });

    // Focus the dialog so Escape reaches it without a click first.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    view! {
        <div class="post-modal__backdrop" on:click=move |_| on_dismiss.run(DismissTrigger::Backdrop)>
            <article
                node_ref=dialog_ref
                class="post-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="post-modal-title"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <button
                    class="post-modal__close"
                    type="button"
                    title="Close article"
                    on:click=move |_| on_dismiss.run(DismissTrigger::CloseButton)
                >
                    "✕"
                </button>
                <div class="post-modal__image-wrap">
                    <img class="post-modal__image" src=image_url alt=alt/>
                </div>
                <div class="post-modal__body">
                    <p class="post-modal__date">{date}</p>
                    <h2 id="post-modal-title" class="post-modal__title">{title}</h2>
                    <p class="post-modal__description">{description}</p>
                    <button
                        class="post-modal__back"
                        type="button"
                        on:click=move |_| on_dismiss.run(DismissTrigger::BackAction)
                    >
                        "← Back to Insights"
                    </button>
                </div>
            </article>
        </div>
    }
}
