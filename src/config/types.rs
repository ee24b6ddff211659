//! Core configuration types for bulk image fetching
//!
//! This module contains the main `FetchConfig` struct and its associated
//! types that define the parameters for one fetch run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Provider-side filter on the kind of images returned.
///
/// Delegated entirely to the search provider's query flags; no local
/// content classification is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFilter {
    Photo,
    Clipart,
    Gif,
    LineDrawing,
    Transparent,
}

/// Configuration for one bulk image fetch.
///
/// Constructed once per invocation via [`FetchConfig::builder`] and
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Search query. Never empty (validated in builder). Slugified before
    /// use as a directory name.
    pub(crate) query: String,

    /// Number of images to materialize. Always >= 1 (validated in builder).
    pub(crate) limit: usize,

    /// Root output directory. The run writes into `output_dir/<slug(query)>`.
    pub(crate) output_dir: PathBuf,

    /// Whether the provider's adult-content filter is enabled.
    pub(crate) adult_filter: bool,

    /// Optional provider-side image-kind filter.
    pub(crate) content_filter: Option<ContentFilter>,

    /// Remove a pre-existing query directory before the run.
    pub(crate) force_replace: bool,

    /// Timeout applied to every HTTP request (search pages and downloads).
    pub(crate) timeout: Duration,

    /// Reject bodies larger than this many bytes.
    pub(crate) max_image_bytes: usize,

    /// Reject bodies smaller than this many bytes (placeholder filtering).
    pub(crate) min_image_bytes: usize,

    /// Maximum concurrent download workers.
    pub(crate) max_workers: usize,

    /// Safety ceiling on search result pages pulled per run.
    pub(crate) max_pages: usize,

    /// Attempts for the initial discovery request before aborting the run.
    pub(crate) discovery_retries: u32,

    /// Retries for a transient per-candidate download failure.
    pub(crate) download_retries: u32,

    /// User agent sent on every request.
    pub(crate) user_agent: String,
}
