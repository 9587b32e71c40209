//! Cached access to the latest release.
//!
//! The page is re-rendered on every request, but release metadata only needs
//! to be fetched once an hour. Failures are contained here: the renderer only
//! ever sees "a release" or "no release".

use log::warn;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::github::{GetLatestRelease, Release};

/// How long a fetched release stays valid.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

struct CacheEntry {
    release: Release,
    fetched_at: Instant,
}

/// TTL cache in front of a [`GetLatestRelease`] source.
///
/// Only successful fetches are cached; a failed fetch yields `None` for the
/// current render and the next render tries again.
pub struct ReleaseCache {
    source: Arc<dyn GetLatestRelease>,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl ReleaseCache {
    pub fn new(source: Arc<dyn GetLatestRelease>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Returns the latest release, from cache when fresh.
    ///
    /// Any fetch failure (network error, non-2xx status, malformed payload)
    /// is logged and mapped to `None`; errors never reach the caller.
    #[tracing::instrument(skip(self))]
    pub async fn latest(&self) -> Option<Release> {
        // The lock is held across the fetch so concurrent renders share one
        // upstream request instead of racing.
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Some(cached.release.clone());
            }
        }

        match self.source.latest_release().await {
            Ok(release) => {
                *entry = Some(CacheEntry {
                    release: release.clone(),
                    fetched_at: Instant::now(),
                });
                Some(release)
            }
            Err(e) => {
                warn!("Failed to fetch latest release: {:#}", e);
                None
            }
        }
    }
}
