//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the whole site: Leptos SSR for `/`, `/blog` and
//! `/contact`, the compiled WASM/CSS bundle under `/pkg`, static images
//! under `/assets`, and `/healthz` for the load balancer. Anything else is
//! rendered through the Leptos shell, whose fallback route answers 404.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use practice_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Load Leptos options from the workspace manifest and build the router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section and no `LEPTOS_*`
/// environment overrides).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(site_router(conf.leptos_options, config))
}

/// Build the router for already-resolved Leptos options.
pub fn site_router(leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    let routes = generate_route_list(App);
    tracing::debug!(count = routes.len(), "registered leptos routes");

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());

    let router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback(file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(TraceLayer::new_for_http());

    if config.compression { router.layer(CompressionLayer::new()) } else { router }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
