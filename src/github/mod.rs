//! GitHub releases API client.
//!
//! The download button is populated from the latest published release of the
//! product repository, so this module only covers the
//! `/repos/{owner}/{repo}/releases/latest` endpoint.

mod client;
mod repo;
mod types;

pub use client::{GetLatestRelease, GitHub, build_client};
pub use repo::GitHubRepo;
pub use types::{Release, ReleaseAsset};

#[cfg(test)]
pub use client::MockGetLatestRelease;
