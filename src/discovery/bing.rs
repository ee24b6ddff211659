//! Bing image search provider
//!
//! Bing's `/images/async` endpoint returns HTML fragments in which each
//! result anchor carries an `m="..."` attribute holding HTML-escaped JSON
//! metadata (`murl` = full-resolution image URL, `turl` = thumbnail).
//! There is no documented schema; extraction is best-effort and a page
//! with no matches simply yields zero candidates.

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::sync::LazyLock;
use url::Url;

use crate::config::ContentFilter;
use crate::utils::content_type_hint_for_url;

use super::errors::DiscoveryError;
use super::provider::SearchProvider;
use super::types::{Candidate, PageRequest, SearchPage};

/// Production endpoint; overridable for tests via [`BingProvider::with_base_url`].
const BING_BASE_URL: &str = "https://www.bing.com";

/// Matches the escaped JSON metadata attribute on each result anchor.
static METADATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"m="(\{[^"]+\})""#).unwrap_or_else(|e| unreachable!("invalid literal regex: {e}"))
});

/// The subset of Bing's per-result metadata we consume.
#[derive(Debug, Deserialize)]
struct BingImageMetadata {
    /// Media URL: the full-resolution image on the original host
    murl: String,
    /// Thumbnail URL on Bing's CDN
    #[serde(default)]
    turl: Option<String>,
}

/// Image-search provider backed by Bing's async results endpoint.
#[derive(Debug, Clone)]
pub struct BingProvider {
    client: Client,
    base_url: String,
}

impl BingProvider {
    /// Create a provider using the given HTTP client.
    ///
    /// The client is expected to carry the run's timeout and user agent.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BING_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different host (mock servers in tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn page_url(&self, request: &PageRequest<'_>) -> Result<Url, DiscoveryError> {
        let mut url = Url::parse(&self.base_url)?;
        url.set_path("/images/async");
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("q", request.query)
                .append_pair("first", &request.offset.to_string())
                .append_pair("count", &request.count.to_string())
                .append_pair("adlt", if request.adult_filter { "on" } else { "off" });
            if let Some(filter) = request.content_filter {
                pairs.append_pair("qft", filter_param(filter));
            }
        }
        Ok(url)
    }
}

/// Bing's `qft` filter vocabulary.
fn filter_param(filter: ContentFilter) -> &'static str {
    match filter {
        ContentFilter::Photo => "+filterui:photo-photo",
        ContentFilter::Clipart => "+filterui:photo-clipart",
        ContentFilter::Gif => "+filterui:photo-animatedgif",
        ContentFilter::LineDrawing => "+filterui:photo-linedrawing",
        ContentFilter::Transparent => "+filterui:photo-transparent",
    }
}

/// Extract candidates from a results page body.
///
/// Tolerates malformed entries: any metadata blob that fails to decode or
/// parse is skipped with a debug log, never an error.
fn parse_results_page(body: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for capture in METADATA_RE.captures_iter(body) {
        let Some(raw) = capture.get(1) else {
            continue;
        };
        let decoded = html_escape::decode_html_entities(raw.as_str());
        let metadata: BingImageMetadata = match serde_json::from_str(&decoded) {
            Ok(m) => m,
            Err(e) => {
                log::debug!("skipping unparseable result metadata: {e}");
                continue;
            }
        };

        if !metadata.murl.starts_with("http://") && !metadata.murl.starts_with("https://") {
            log::debug!("skipping non-http media url: {}", metadata.murl);
            continue;
        }

        let content_type_hint =
            content_type_hint_for_url(&metadata.murl).map(ToString::to_string);
        candidates.push(Candidate {
            source_url: metadata.murl,
            thumbnail_url: metadata.turl,
            content_type_hint,
        });
    }

    candidates
}

#[async_trait]
impl SearchProvider for BingProvider {
    async fn fetch_page(&self, request: PageRequest<'_>) -> Result<SearchPage, DiscoveryError> {
        let url = self.page_url(&request)?;
        log::debug!("fetching results page: offset={}", request.offset);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let candidates = parse_results_page(&body);
        log::debug!(
            "results page at offset {} yielded {} candidates",
            request.offset,
            candidates.len()
        );

        Ok(SearchPage { candidates })
    }
}
