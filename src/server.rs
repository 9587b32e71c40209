//! Inbound HTTP surface: the page itself plus a health probe.

use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::get,
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::asset::DownloadTarget;
use crate::release::ReleaseCache;
use crate::site::render_page;

/// Shared state injected into route handlers.
#[derive(Clone)]
pub struct AppState {
    pub releases: Arc<ReleaseCache>,
    pub target: DownloadTarget,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// GET /
///
/// Always responds 200. A failed release fetch degrades to the disabled
/// download control; it never becomes an error page.
#[tracing::instrument(skip(state))]
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let release = state.releases.latest().await;
    let download_url = state.target.download_url(release.as_ref());
    let tag = release.as_ref().map(|r| r.tag_name.as_str());

    Html(render_page(tag, download_url.as_deref()))
}

/// GET /health
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-mcp-site"
    }))
}
