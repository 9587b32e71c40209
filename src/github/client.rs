use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::env;

use super::repo::GitHubRepo;
use super::types::Release;
use crate::http::HttpClient;

/// Source of release metadata for the download section.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetLatestRelease: Send + Sync {
    /// Fetches the latest published release of the product repository.
    async fn latest_release(&self) -> Result<Release>;
}

/// GitHub REST API implementation of [`GetLatestRelease`].
pub struct GitHub {
    http: HttpClient,
    api_url: String,
    repo: GitHubRepo,
}

impl GitHub {
    /// Creates a client against the public GitHub API.
    pub fn new(client: Client, repo: GitHubRepo) -> Self {
        Self::with_api_url(client, repo, "https://api.github.com")
    }

    /// Creates a client against a custom API base URL (used by tests).
    pub fn with_api_url(client: Client, repo: GitHubRepo, api_url: &str) -> Self {
        Self {
            http: HttpClient::new(client),
            api_url: api_url.trim_end_matches('/').to_string(),
            repo,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn repo(&self) -> &GitHubRepo {
        &self.repo
    }
}

#[async_trait]
impl GetLatestRelease for GitHub {
    #[tracing::instrument(skip(self))]
    async fn latest_release(&self) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, self.repo.owner, self.repo.repo
        );

        debug!("Fetching latest release from {}...", url);

        self.http.get_json(&url).await
    }
}

/// Builds the shared reqwest client.
///
/// GitHub rejects requests without a User-Agent. If GITHUB_TOKEN is set it is
/// attached as a bearer header, which raises the unauthenticated rate limit.
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    if let Ok(token) = env::var("GITHUB_TOKEN") {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("Using GITHUB_TOKEN for authentication");
    }

    Client::builder()
        .user_agent("resume-mcp-site")
        .default_headers(headers)
        .build()
        .context("Failed to build HTTP client")
}
