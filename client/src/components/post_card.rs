//! Insights grid card.

use leptos::prelude::*;

use crate::content::{Post, PostId};

/// Clickable post preview; activating it reports the post's id to `on_select`.
#[component]
pub fn PostCard(post: Post, on_select: Callback<PostId>) -> impl IntoView {
    let Post { id, date, title, image_url, .. } = post;
    let alt = title.clone();

    view! {
        <article class="post-card" on:click=move |_| on_select.run(id)>
            <div class="post-card__image-wrap">
                <img class="post-card__image" src=image_url alt=alt loading="lazy"/>
            </div>
            <p class="post-card__date">{date}</p>
            <h3 class="post-card__title">{title}</h3>
            <span class="post-card__link">"Read Article"</span>
        </article>
    }
}
