//! The narrow seam between fetch/persist logic and provider markup parsing
//!
//! Search providers expose no stable structured API for image results, so
//! extraction is best-effort pattern parsing of returned markup. All of
//! that lives behind this one trait; the engine only ever sees
//! `Candidate`s.

use async_trait::async_trait;

use super::errors::DiscoveryError;
use super::types::{PageRequest, SearchPage};

/// A source of image-search result pages.
///
/// Implementations issue one HTTP request per page and parse whatever the
/// provider returns. Missing fields and absent matches must degrade to an
/// empty page rather than an error.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Fetch and parse one results page.
    async fn fetch_page(&self, request: PageRequest<'_>) -> Result<SearchPage, DiscoveryError>;
}
