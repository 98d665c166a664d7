use super::*;

use std::net::SocketAddr;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("practice-site")
        .site_root("target/test-site")
        .build()
}

fn test_config() -> ServerConfig {
    ServerConfig { port: 0, assets_dir: PathBuf::from("target/test-assets"), compression: false }
}

/// Serve the router on an ephemeral port and return its address.
async fn spawn_site() -> SocketAddr {
    let app = site_router(test_options(), &test_config());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn get_page(addr: SocketAddr, path: &str) -> (u16, String) {
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    let status = response.status().as_u16();
    let body = response.text().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread")]
async fn healthz_is_routed() {
    let addr = spawn_site().await;
    let (status, _) = get_page(addr, "/healthz").await;
    assert_eq!(status, 200);
}

#[tokio::test(flavor = "multi_thread")]
async fn each_site_route_renders_inside_the_shell() {
    let addr = spawn_site().await;
    for (path, marker) in [("/", "Common Questions"), ("/blog", "Stay Connected"), ("/contact", "Book a session.")] {
        let (status, body) = get_page(addr, path).await;
        assert_eq!(status, 200, "{path}");
        assert!(body.contains(marker), "{path} missing {marker:?}");
        assert!(body.contains("site-nav"), "{path} rendered without navigation");
        assert!(body.contains("site-footer"), "{path} rendered without footer");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn blog_renders_every_post_and_no_reader() {
    let addr = spawn_site().await;
    let (_, body) = get_page(addr, "/blog").await;
    assert!(body.contains("Grounding Techniques for Panic Moments"));
    assert!(body.contains("Healing from Past Trauma in Adulthood"));
    assert!(!body.contains("post-modal__backdrop"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unmatched_path_is_not_found() {
    let addr = spawn_site().await;
    let (status, body) = get_page(addr, "/no-such-page").await;
    assert_eq!(status, 404);
    assert!(body.contains("Page not found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_bundle_file_is_not_found() {
    let addr = spawn_site().await;
    let (status, _) = get_page(addr, "/pkg/missing.wasm").await;
    assert_eq!(status, 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn blog_cards_are_rendered_visible() {
    let addr = spawn_site().await;
    let (_, body) = get_page(addr, "/blog").await;
    let title = body.find("Grounding Techniques for Panic Moments").unwrap();
    let wrapper = body[..title].rfind("class=\"reveal\"").unwrap();
    let card = &body[wrapper..title];
    assert!(card.contains("opacity:1;transform:none"), "{card}");
    assert!(!card.contains("opacity:0"), "{card}");
}

#[tokio::test(flavor = "multi_thread")]
async fn no_page_is_rendered_with_hidden_sections() {
    let addr = spawn_site().await;
    for path in ["/", "/blog", "/contact"] {
        let (_, body) = get_page(addr, path).await;
        assert!(body.contains("class=\"reveal\""), "{path} has no reveal sections");
        assert!(!body.contains("opacity:0"), "{path} renders a hidden section");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn nav_marks_the_current_page() {
    let addr = spawn_site().await;
    let (_, body) = get_page(addr, "/contact").await;
    assert_eq!(body.matches("site-nav__link--active").count(), 1);
    let active = body.find("site-nav__link--active").unwrap();
    let link_end = active + body[active..].find("</a>").unwrap();
    assert!(body[active..link_end].contains("Contact"));

    let (_, body) = get_page(addr, "/no-such-page").await;
    assert_eq!(body.matches("site-nav__link--active").count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn contact_hosts_the_map_embed() {
    let addr = spawn_site().await;
    let (status, body) = get_page(addr, "/contact").await;
    assert_eq!(status, 200);
    assert!(body.contains("class=\"office-map__embed\""));
    assert!(body.contains("<iframe"));
    assert!(body.contains("google.com/maps/embed"));
}
