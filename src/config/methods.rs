//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use std::time::Duration;

use super::builder::FetchConfigBuilder;
use super::types::ContentFilter;

// Methods available for all states
impl<State> FetchConfigBuilder<State> {
    /// Set the number of images to materialize (default: 10)
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enable or disable the provider's adult-content filter
    ///
    /// Disabled by default. This delegates to the provider's query flag;
    /// no local content classification is performed.
    #[must_use]
    pub fn adult_filter(mut self, enabled: bool) -> Self {
        self.adult_filter = enabled;
        self
    }

    /// Restrict results to a kind of image (photo, clipart, ...)
    #[must_use]
    pub fn content_filter(mut self, filter: ContentFilter) -> Self {
        self.content_filter = Some(filter);
        self
    }

    /// Remove a pre-existing query directory before the run
    ///
    /// When set, the run's target directory is wiped first, so afterwards
    /// it contains only files from this run.
    #[must_use]
    pub fn force_replace(mut self, replace: bool) -> Self {
        self.force_replace = replace;
        self
    }

    /// Set the per-request timeout (default: 60 seconds)
    ///
    /// Applied to every search page request and every image download.
    /// A request exceeding the timeout is a failed candidate, never a
    /// fatal error.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum accepted body size in bytes (default: 10 MB)
    #[must_use]
    pub fn max_image_bytes(mut self, bytes: usize) -> Self {
        self.max_image_bytes = bytes;
        self
    }

    /// Set the minimum plausible body size in bytes (default: 1 KB)
    #[must_use]
    pub fn min_image_bytes(mut self, bytes: usize) -> Self {
        self.min_image_bytes = bytes;
        self
    }

    /// Set the number of concurrent download workers (default: 6)
    #[must_use]
    pub fn max_workers(mut self, workers: usize) -> Self {
        self.max_workers = workers;
        self
    }

    /// Set the search-page safety ceiling (default: 10)
    #[must_use]
    pub fn max_pages(mut self, pages: usize) -> Self {
        self.max_pages = pages;
        self
    }

    /// Set retry attempts for the initial discovery request (default: 3)
    #[must_use]
    pub fn discovery_retries(mut self, retries: u32) -> Self {
        self.discovery_retries = retries;
        self
    }

    /// Set retries for transient per-candidate failures (default: 1)
    ///
    /// Set to 0 to make every transient error permanent immediately.
    #[must_use]
    pub fn download_retries(mut self, retries: u32) -> Self {
        self.download_retries = retries;
        self
    }

    /// Override the user agent sent on every request
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
