//! Getter methods for `FetchConfig`
//!
//! This module provides all the accessor methods for retrieving
//! configuration values from a `FetchConfig` instance.

use std::path::PathBuf;
use std::time::Duration;

use super::types::{ContentFilter, FetchConfig};

impl FetchConfig {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    #[must_use]
    pub fn adult_filter(&self) -> bool {
        self.adult_filter
    }

    #[must_use]
    pub fn content_filter(&self) -> Option<ContentFilter> {
        self.content_filter
    }

    #[must_use]
    pub fn force_replace(&self) -> bool {
        self.force_replace
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes
    }

    #[must_use]
    pub fn min_image_bytes(&self) -> usize {
        self.min_image_bytes
    }

    #[must_use]
    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    #[must_use]
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    #[must_use]
    pub fn discovery_retries(&self) -> u32 {
        self.discovery_retries
    }

    #[must_use]
    pub fn download_retries(&self) -> u32 {
        self.download_retries
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
