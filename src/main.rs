use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use resume_mcp_site::asset::DownloadTarget;
use resume_mcp_site::github::{GitHub, GitHubRepo, build_client};
use resume_mcp_site::release::ReleaseCache;
use resume_mcp_site::server::{AppState, build_router};

/// resume-mcp-site - marketing and download page for Resume MCP
///
/// Serves a single page whose download button points at the latest macOS
/// package published on GitHub.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for
/// authentication. This is useful for avoiding API rate limits.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", value_name = "ADDR", default_value = "0.0.0.0:8080")]
    bind: String,

    /// The GitHub repository in the format "owner/repo"
    #[arg(long, value_name = "OWNER/REPO", default_value = "rxtech-lab/resume-mcp")]
    repo: String,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,

    /// How long fetched release metadata stays valid, in seconds
    #[arg(long = "cache-ttl", value_name = "SECONDS", default_value_t = 3600)]
    cache_ttl: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-mcp-site v{}", env!("CARGO_PKG_VERSION"));

    let repo: GitHubRepo = cli.repo.parse()?;
    let client = build_client()?;
    let github = match cli.api_url {
        Some(url) => GitHub::with_api_url(client, repo, &url),
        None => GitHub::new(client, repo),
    };

    let releases = Arc::new(ReleaseCache::new(
        Arc::new(github),
        Duration::from_secs(cli.cache_ttl),
    ));

    let state = AppState {
        releases,
        target: DownloadTarget::macos_arm64_pkg(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = cli.bind.parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
