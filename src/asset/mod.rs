//! Release asset selection.
//!
//! Picks which downloadable artifact the page should link to, based on
//! platform and architecture markers in the asset name.

mod picker;

pub use picker::DownloadTarget;
