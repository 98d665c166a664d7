use super::*;

#[test]
fn every_route_resolves_from_its_own_path() {
    for route in SiteRoute::ALL {
        assert_eq!(SiteRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn trailing_slash_is_tolerated() {
    assert_eq!(SiteRoute::from_path("/blog/"), Some(SiteRoute::Blog));
    assert_eq!(SiteRoute::from_path("/contact/"), Some(SiteRoute::Contact));
}

#[test]
fn unknown_paths_are_unmatched() {
    assert_eq!(SiteRoute::from_path("/about"), None);
    assert_eq!(SiteRoute::from_path("/blog/3"), None);
    assert_eq!(SiteRoute::from_path(""), None);
    assert_eq!(SiteRoute::from_path("/blogs"), None);
}

#[test]
fn blog_is_labelled_insights() {
    assert_eq!(SiteRoute::Blog.label(), "Insights");
    assert_eq!(SiteRoute::Home.label(), "Home");
}

#[test]
fn navigation_order_is_home_blog_contact() {
    let paths: Vec<_> = SiteRoute::ALL.iter().map(|r| r.path()).collect();
    assert_eq!(paths, vec!["/", "/blog", "/contact"]);
}

#[test]
fn nav_class_marks_only_the_current_route() {
    let current = SiteRoute::from_path("/blog/");
    assert_eq!(SiteRoute::Blog.nav_class(current), "site-nav__link site-nav__link--active");
    assert_eq!(SiteRoute::Home.nav_class(current), "site-nav__link");
    assert_eq!(SiteRoute::Contact.nav_class(current), "site-nav__link");
}

#[test]
fn nav_class_on_unmatched_path_marks_nothing() {
    let current = SiteRoute::from_path("/no-such-page");
    assert!(SiteRoute::ALL.iter().all(|r| r.nav_class(current) == "site-nav__link"));
}
