//! Type-safe builder for `FetchConfig` using the typestate pattern
//!
//! Required fields (output directory and query) are enforced at compile
//! time; everything else has a sensible default and is validated in
//! `build()`.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::{
    DEFAULT_DISCOVERY_RETRIES, DEFAULT_DOWNLOAD_RETRIES, DEFAULT_LIMIT, DEFAULT_MAX_IMAGE_BYTES,
    DEFAULT_MAX_PAGES, DEFAULT_MAX_WORKERS, DEFAULT_MIN_IMAGE_BYTES, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

use super::types::{ContentFilter, FetchConfig};

// Type states for the builder
pub struct WithOutputDir;
pub struct WithQuery;

pub struct FetchConfigBuilder<State = ()> {
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) query: Option<String>,
    pub(crate) limit: usize,
    pub(crate) adult_filter: bool,
    pub(crate) content_filter: Option<ContentFilter>,
    pub(crate) force_replace: bool,
    pub(crate) timeout: Duration,
    pub(crate) max_image_bytes: usize,
    pub(crate) min_image_bytes: usize,
    pub(crate) max_workers: usize,
    pub(crate) max_pages: usize,
    pub(crate) discovery_retries: u32,
    pub(crate) download_retries: u32,
    pub(crate) user_agent: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for FetchConfigBuilder<()> {
    fn default() -> Self {
        Self {
            output_dir: None,
            query: None,
            limit: DEFAULT_LIMIT,
            adult_filter: false,
            content_filter: None,
            force_replace: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            min_image_bytes: DEFAULT_MIN_IMAGE_BYTES,
            max_workers: DEFAULT_MAX_WORKERS,
            max_pages: DEFAULT_MAX_PAGES,
            discovery_retries: DEFAULT_DISCOVERY_RETRIES,
            download_retries: DEFAULT_DOWNLOAD_RETRIES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl FetchConfig {
    /// Create a builder for configuring a `FetchConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> FetchConfigBuilder<()> {
        FetchConfigBuilder::default()
    }
}

impl FetchConfigBuilder<()> {
    pub fn output_dir(self, dir: impl Into<PathBuf>) -> FetchConfigBuilder<WithOutputDir> {
        FetchConfigBuilder {
            output_dir: Some(dir.into()),
            query: self.query,
            limit: self.limit,
            adult_filter: self.adult_filter,
            content_filter: self.content_filter,
            force_replace: self.force_replace,
            timeout: self.timeout,
            max_image_bytes: self.max_image_bytes,
            min_image_bytes: self.min_image_bytes,
            max_workers: self.max_workers,
            max_pages: self.max_pages,
            discovery_retries: self.discovery_retries,
            download_retries: self.download_retries,
            user_agent: self.user_agent,
            _phantom: PhantomData,
        }
    }
}

impl FetchConfigBuilder<WithOutputDir> {
    pub fn query(self, query: impl Into<String>) -> FetchConfigBuilder<WithQuery> {
        FetchConfigBuilder {
            output_dir: self.output_dir,
            query: Some(query.into()),
            limit: self.limit,
            adult_filter: self.adult_filter,
            content_filter: self.content_filter,
            force_replace: self.force_replace,
            timeout: self.timeout,
            max_image_bytes: self.max_image_bytes,
            min_image_bytes: self.min_image_bytes,
            max_workers: self.max_workers,
            max_pages: self.max_pages,
            discovery_retries: self.discovery_retries,
            download_retries: self.download_retries,
            user_agent: self.user_agent,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when all required fields are set
impl FetchConfigBuilder<WithQuery> {
    pub fn build(self) -> Result<FetchConfig> {
        let query = self
            .query
            .ok_or_else(|| anyhow!("query is required"))?;
        let output_dir = self
            .output_dir
            .ok_or_else(|| anyhow!("output_dir is required"))?;

        if query.trim().is_empty() {
            return Err(anyhow!("query must not be empty"));
        }
        if self.limit == 0 {
            return Err(anyhow!("limit must be at least 1"));
        }
        if self.max_workers == 0 {
            return Err(anyhow!("max_workers must be at least 1"));
        }
        if self.max_pages == 0 {
            return Err(anyhow!("max_pages must be at least 1"));
        }
        if self.timeout.is_zero() {
            return Err(anyhow!("timeout must be positive"));
        }
        if self.min_image_bytes >= self.max_image_bytes {
            return Err(anyhow!(
                "min_image_bytes ({}) must be below max_image_bytes ({})",
                self.min_image_bytes,
                self.max_image_bytes
            ));
        }

        Ok(FetchConfig {
            query,
            limit: self.limit,
            output_dir,
            adult_filter: self.adult_filter,
            content_filter: self.content_filter,
            force_replace: self.force_replace,
            timeout: self.timeout,
            max_image_bytes: self.max_image_bytes,
            min_image_bytes: self.min_image_bytes,
            max_workers: self.max_workers,
            max_pages: self.max_pages,
            discovery_retries: self.discovery_retries,
            download_retries: self.download_retries,
            user_agent: self.user_agent,
        })
    }
}
