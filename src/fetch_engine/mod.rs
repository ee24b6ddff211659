//! Fetch Engine Module
//!
//! The core of the crate: resolves the output directory, consumes the
//! candidate stream, downloads under bounded concurrency, validates,
//! deduplicates by content hash, and persists accepted images atomically.

// Sub-modules
pub mod directory;
pub mod download;
pub mod engine;
pub mod errors;
pub mod persist;
pub mod types;

// Re-exports for public API
pub use directory::resolve_output_directory;
pub use engine::ImageFetcher;
pub use errors::{CandidateError, FetchError};
pub use types::{FetchOutcome, FetchResult};
