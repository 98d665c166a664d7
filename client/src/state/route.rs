//! Top-level site routes.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// One of the three pages mounted under the layout shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    Blog,
    Contact,
}

impl SiteRoute {
    /// Navigation order.
    pub const ALL: [SiteRoute; 3] = [SiteRoute::Home, SiteRoute::Blog, SiteRoute::Contact];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::Blog => "/blog",
            SiteRoute::Contact => "/contact",
        }
    }

    /// Navigation label. The blog is presented as "Insights".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SiteRoute::Home => "Home",
            SiteRoute::Blog => "Insights",
            SiteRoute::Contact => "Contact",
        }
    }

    /// Resolve a request path. A single trailing slash is tolerated; any
    /// other path is unmatched.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }

    /// Desktop nav link class, marked active when `current` is this route.
    #[must_use]
    pub fn nav_class(self, current: Option<SiteRoute>) -> &'static str {
        if current == Some(self) { "site-nav__link site-nav__link--active" } else { "site-nav__link" }
    }
}
