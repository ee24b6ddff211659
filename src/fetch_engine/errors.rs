//! Error taxonomy for fetch runs
//!
//! Two tiers: `FetchError` aborts the whole run and surfaces as `Err`;
//! `CandidateError` removes one candidate from the success count and is
//! only ever aggregated into the outcome's `failed` counter.

use std::path::PathBuf;
use thiserror::Error;

use crate::discovery::DiscoveryError;

/// Fatal error: aborts the entire fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The output directory could not be prepared. Raised before any
    /// network activity; nothing was written.
    #[error("failed to prepare output directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The search provider was unreachable or unusable. The directory
    /// was already created and is left in place, possibly empty.
    #[error("image discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A download worker panicked (a bug, not an I/O condition)
    #[error("download worker panicked: {0}")]
    Worker(String),
}

/// Per-candidate failure: non-fatal, counted into the outcome.
#[derive(Debug, Error)]
pub enum CandidateError {
    /// Image host answered with a non-success status
    #[error("image host returned HTTP {status}")]
    Status { status: u16 },

    /// The request could not be completed (DNS, connect, body read)
    #[error("download failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The request exceeded the configured timeout
    #[error("download timed out")]
    Timeout,

    /// The response body is not an image
    #[error("unsupported content type: {content_type}")]
    NotAnImage { content_type: String },

    /// The body exceeds the configured maximum
    #[error("body of {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    /// The body is below the minimum plausible image size
    /// (broken-image placeholders, empty bodies)
    #[error("body of {size} bytes is below minimum of {limit} bytes")]
    TooSmall { size: usize, limit: usize },

    /// Writing the image to disk failed
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

impl CandidateError {
    /// Check if the failure is transient and worth one more attempt.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            CandidateError::Request(_) | CandidateError::Timeout => true,
            CandidateError::Status { status } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
