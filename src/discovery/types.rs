//! Data structures for candidate discovery

use serde::{Deserialize, Serialize};

use crate::config::ContentFilter;

/// A discovered image reference not yet fetched.
///
/// Produced by parsing a provider results page; discarded once the
/// download attempt resolves. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Full-resolution image URL on the original host
    pub source_url: String,

    /// Provider-hosted thumbnail, when the results page exposed one
    pub thumbnail_url: Option<String>,

    /// Best-effort content-type guess from the URL extension.
    /// The download response's `Content-Type` header is authoritative.
    pub content_type_hint: Option<String>,
}

/// One page worth of search results requested from a provider.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    /// The search term, verbatim
    pub query: &'a str,

    /// Result offset (pagination cursor)
    pub offset: usize,

    /// Number of results requested for this page
    pub count: usize,

    /// Whether the provider's adult-content filter is enabled
    pub adult_filter: bool,

    /// Optional provider-side image-kind filter
    pub content_filter: Option<ContentFilter>,
}

/// Candidates extracted from one provider results page.
///
/// A page that parsed cleanly but contained no recognizable image
/// metadata is an empty page, not an error.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub candidates: Vec<Candidate>,
}
