//! Result types for fetch runs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One successfully materialized image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    /// URL the image was downloaded from
    pub source_url: String,

    /// Where the image landed on disk
    pub local_path: PathBuf,

    /// Size of the saved body in bytes
    pub byte_size: u64,

    /// Content type reported by the image host
    pub content_type: String,
}

/// Aggregate outcome of one fetch run.
///
/// Always returned on non-fatal paths; `succeeded < limit` signals
/// partial success rather than an error. Invariant:
/// `attempted == succeeded + failed + duplicates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchOutcome {
    /// Saved images, ordered by discovery order of their source URLs
    /// (not completion order)
    pub saved: Vec<FetchResult>,

    /// Candidates whose download attempt resolved
    pub attempted: usize,

    /// Candidates saved to disk
    pub succeeded: usize,

    /// Candidates rejected or errored (non-fatal)
    pub failed: usize,

    /// Candidates skipped because an identical body was already saved
    /// this run
    pub duplicates: usize,

    /// Whether the run was cut short by the cancellation signal
    pub cancelled: bool,
}

impl FetchOutcome {
    /// Source URLs of the saved images, in discovery order.
    #[must_use]
    pub fn saved_urls(&self) -> Vec<&str> {
        self.saved.iter().map(|r| r.source_url.as_str()).collect()
    }
}
