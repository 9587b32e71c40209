//! End-to-end tests: real router, real GitHub client, mockito upstream.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use reqwest::Client;
use tower::util::ServiceExt;

use resume_mcp_site::asset::DownloadTarget;
use resume_mcp_site::github::{GitHub, GitHubRepo};
use resume_mcp_site::release::ReleaseCache;
use resume_mcp_site::server::{AppState, build_router};

fn build_app(api_url: &str, ttl: Duration) -> axum::Router {
    let repo: GitHubRepo = "rxtech-lab/resume-mcp".parse().unwrap();
    let github = GitHub::with_api_url(Client::new(), repo, api_url);
    let state = AppState {
        releases: Arc::new(ReleaseCache::new(Arc::new(github), ttl)),
        target: DownloadTarget::macos_arm64_pkg(),
    };
    build_router(state)
}

async fn get_page(app: axum::Router) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

const LATEST_PATH: &str = "/repos/rxtech-lab/resume-mcp/releases/latest";

#[test_log::test(tokio::test)]
async fn test_page_links_latest_package() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", LATEST_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "tag_name": "v1.2.0",
                "assets": [
                    {
                        "name": "resume-mcp-macOS-arm64.pkg",
                        "browser_download_url": "https://x/y.pkg"
                    },
                    {
                        "name": "resume-mcp-linux-x64.tar.gz",
                        "browser_download_url": "https://x/z"
                    }
                ]
            }"#,
        )
        .create_async()
        .await;

    let app = build_app(&server.url(), Duration::from_secs(3600));
    let (status, body) = get_page(app).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Download v1.2.0"));
    assert!(body.contains(r#"href="https://x/y.pkg""#));
    assert!(!body.contains(r#"href="https://x/z""#));
}

#[test_log::test(tokio::test)]
async fn test_page_degrades_when_api_is_down() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", LATEST_PATH)
        .with_status(500)
        .create_async()
        .await;

    let app = build_app(&server.url(), Duration::from_secs(3600));
    let (status, body) = get_page(app).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Download Unavailable"));
    assert!(body.contains("Unable to fetch latest release"));
}

#[test_log::test(tokio::test)]
async fn test_page_degrades_on_malformed_payload() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", LATEST_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{ definitely not json")
        .create_async()
        .await;

    let app = build_app(&server.url(), Duration::from_secs(3600));
    let (status, body) = get_page(app).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Download Unavailable"));
}

#[test_log::test(tokio::test)]
async fn test_repeated_renders_hit_the_api_once() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", LATEST_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "tag_name": "v1.2.0",
                "assets": [
                    {
                        "name": "resume-mcp-macOS-arm64.pkg",
                        "browser_download_url": "https://x/y.pkg"
                    }
                ]
            }"#,
        )
        .expect(1)
        .create_async()
        .await;

    let app = build_app(&server.url(), Duration::from_secs(3600));

    let (_, first) = get_page(app.clone()).await;
    let (_, second) = get_page(app).await;

    // One upstream call, identical output within the cache window.
    mock.assert_async().await;
    assert_eq!(first, second);
}

#[test_log::test(tokio::test)]
async fn test_expired_cache_picks_up_new_release() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", LATEST_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "tag_name": "v1.2.0",
                "assets": [
                    {
                        "name": "resume-mcp-macOS-arm64.pkg",
                        "browser_download_url": "https://x/y.pkg"
                    }
                ]
            }"#,
        )
        .expect(2)
        .create_async()
        .await;

    let app = build_app(&server.url(), Duration::ZERO);

    let (_, first) = get_page(app.clone()).await;
    let (_, second) = get_page(app).await;

    mock.assert_async().await;
    assert!(first.contains("Download v1.2.0"));
    assert!(second.contains("Download v1.2.0"));
}
