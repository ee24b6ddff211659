//! Candidate discovery
//!
//! Turns a query into a lazy stream of candidate image URLs by paging
//! through a web image-search provider and pattern-parsing the embedded
//! result metadata. All provider-format knowledge is isolated behind the
//! [`SearchProvider`] trait so the response format can change without
//! touching fetch/persist logic.

// Sub-modules
pub mod bing;
pub mod errors;
pub mod provider;
pub mod stream;
pub mod types;

// Re-exports for public API
pub use bing::BingProvider;
pub use errors::DiscoveryError;
pub use provider::SearchProvider;
pub use stream::CandidateStream;
pub use types::{Candidate, PageRequest, SearchPage};
