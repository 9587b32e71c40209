use crate::github::{Release, ReleaseAsset};

/// Describes the artifact the download button should point at.
///
/// An asset matches when its name contains both markers and ends with the
/// extension, compared case-insensitively. Ties are broken by list order:
/// the first matching asset wins.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadTarget {
    os_marker: String,
    arch_marker: String,
    extension: String,
}

impl DownloadTarget {
    pub fn new(
        os_marker: impl Into<String>,
        arch_marker: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            os_marker: os_marker.into().to_lowercase(),
            arch_marker: arch_marker.into().to_lowercase(),
            extension: extension.into().to_lowercase(),
        }
    }

    /// The macOS Apple Silicon installer package, the only build the page
    /// currently offers.
    pub fn macos_arm64_pkg() -> Self {
        Self::new("macos", "arm64", ".pkg")
    }

    fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        name.contains(&self.os_marker)
            && name.contains(&self.arch_marker)
            && name.ends_with(&self.extension)
    }

    /// Picks the first matching asset in list order.
    pub fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        assets.iter().find(|a| self.matches(&a.name))
    }

    /// Resolves the download address for a release, if any.
    pub fn download_url(&self, release: Option<&Release>) -> Option<String> {
        release
            .and_then(|r| self.pick(&r.assets))
            .map(|a| a.browser_download_url.clone())
    }
}
