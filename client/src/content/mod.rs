//! Site content: blog posts and practice copy.
//!
//! DESIGN
//! ======
//! Views never read the post list directly. They go through a
//! [`ContentProvider`] taken from Leptos context, so a CMS-backed provider
//! can replace [`StaticContent`] without touching page logic. Practice copy
//! (FAQ, office details, footer) is plain `const` data in [`practice`].


pub mod posts;
pub mod practice;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable identifier of a blog post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u32);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One insights article. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Display date, already formatted for readers.
    pub date: String,
    pub title: String,
    pub image_url: String,
    pub description: String,
}

/// Source of blog posts.
pub trait ContentProvider {
    /// All posts in display order.
    fn posts(&self) -> Vec<Post>;

    /// Look up a single post by id.
    fn post(&self, id: PostId) -> Option<Post> {
        self.posts().into_iter().find(|post| post.id == id)
    }
}

/// Provider handle stored in Leptos context.
pub type SharedContent = Arc<dyn ContentProvider + Send + Sync>;

/// Built-in provider backed by the compiled-in post list.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticContent;

impl ContentProvider for StaticContent {
    fn posts(&self) -> Vec<Post> {
        posts::POSTS.iter().map(posts::PostRecord::to_post).collect()
    }
}

/// Resolve the provider from context, falling back to [`StaticContent`].
pub fn use_content() -> SharedContent {
    leptos::prelude::use_context::<SharedContent>().unwrap_or_else(|| Arc::new(StaticContent))
}
