//! Lazy, paged candidate stream
//!
//! Discovery is inherently sequential: each page request depends on the
//! offset reached by the prior page. The stream pulls pages on demand as
//! the consumer asks for more candidates and is not restartable; each
//! fetch run builds a fresh one.

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use crate::config::FetchConfig;
use crate::utils::{DISCOVERY_RETRY_BACKOFF_MS, SEARCH_PAGE_SIZE};

use super::errors::DiscoveryError;
use super::provider::SearchProvider;
use super::types::{Candidate, PageRequest};

/// A finite, lazily-populated sequence of candidates.
///
/// Ends when the provider yields a page with no new candidates or the
/// configured page ceiling is reached. The first page is retried with
/// backoff; an error there aborts the whole fetch. Errors on later pages
/// merely end the stream early.
pub struct CandidateStream<'a, P: SearchProvider + ?Sized> {
    provider: &'a P,
    config: &'a FetchConfig,
    offset: usize,
    pages_fetched: usize,
    buffer: VecDeque<Candidate>,
    seen_urls: HashSet<String>,
    exhausted: bool,
}

impl<'a, P: SearchProvider + ?Sized> CandidateStream<'a, P> {
    pub fn new(provider: &'a P, config: &'a FetchConfig) -> Self {
        Self {
            provider,
            config,
            offset: 0,
            pages_fetched: 0,
            buffer: VecDeque::new(),
            seen_urls: HashSet::new(),
            exhausted: false,
        }
    }

    /// Pull the next candidate, requesting further pages as needed.
    ///
    /// `Ok(None)` means the provider is out of results (or the page
    /// ceiling was hit). `Err` is only possible while the first page has
    /// not been obtained.
    pub async fn next(&mut self) -> Result<Option<Candidate>, DiscoveryError> {
        loop {
            if let Some(candidate) = self.buffer.pop_front() {
                return Ok(Some(candidate));
            }
            if self.exhausted || self.pages_fetched >= self.config.max_pages() {
                return Ok(None);
            }
            self.fetch_next_page().await?;
        }
    }

    async fn fetch_next_page(&mut self) -> Result<(), DiscoveryError> {
        let request = PageRequest {
            query: self.config.query(),
            offset: self.offset,
            count: SEARCH_PAGE_SIZE,
            adult_filter: self.config.adult_filter(),
            content_filter: self.config.content_filter(),
        };

        let page = if self.pages_fetched == 0 {
            match self.fetch_first_page(request).await {
                Ok(page) => page,
                Err(e) => {
                    self.exhausted = true;
                    return Err(e);
                }
            }
        } else {
            match self.provider.fetch_page(request).await {
                Ok(page) => page,
                Err(e) => {
                    // Best-effort past the first page: stop yielding.
                    log::warn!(
                        "ending discovery after page error at offset {}: {e}",
                        self.offset
                    );
                    self.exhausted = true;
                    return Ok(());
                }
            }
        };

        self.pages_fetched += 1;
        self.offset += page.candidates.len().max(1);

        let mut fresh = 0usize;
        for candidate in page.candidates {
            if self.seen_urls.insert(candidate.source_url.clone()) {
                self.buffer.push_back(candidate);
                fresh += 1;
            }
        }

        // A page with nothing new means the provider is repeating itself
        // or out of results.
        if fresh == 0 {
            self.exhausted = true;
        }

        Ok(())
    }

    async fn fetch_first_page(
        &self,
        request: PageRequest<'_>,
    ) -> Result<super::types::SearchPage, DiscoveryError> {
        let max_attempts = self.config.discovery_retries().max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.provider.fetch_page(request).await {
                Ok(page) => return Ok(page),
                Err(e) if attempt < max_attempts && e.is_transient() => {
                    let backoff = Duration::from_millis(
                        DISCOVERY_RETRY_BACKOFF_MS * u64::from(attempt),
                    );
                    log::warn!(
                        "discovery attempt {attempt}/{max_attempts} failed ({e}), retrying in {backoff:?}"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
