//! Error types for candidate discovery
//!
//! Discovery failures on the first page abort the whole fetch; later page
//! failures merely end the candidate stream. Both paths surface through
//! this type.

use thiserror::Error;

/// Error raised when a provider results page cannot be obtained.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The search request could not be completed (DNS, connect, timeout,
    /// body read)
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("search returned HTTP {status}")]
    Status { status: u16 },

    /// The configured provider base URL does not parse
    #[error("invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl DiscoveryError {
    /// Check if a retry against the provider is worthwhile.
    ///
    /// A malformed base URL will never succeed; everything else is
    /// network weather.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            DiscoveryError::Request(_) => true,
            DiscoveryError::Status { status } => *status >= 500 || *status == 429,
            DiscoveryError::InvalidUrl(_) => false,
        }
    }
}
