//! imagescrape: bulk image acquisition
//!
//! Given a query string and a result limit, discover candidate image URLs
//! from a web image-search provider, download them under bounded
//! concurrency, validate content type and size, deduplicate by content
//! hash, and persist accepted images atomically to a per-query directory.
//!
//! ```rust,no_run
//! use imagescrape::FetchConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = FetchConfig::builder()
//!     .output_dir("./dataset")
//!     .query("red panda")
//!     .limit(5)
//!     .build()?;
//!
//! let outcome = imagescrape::fetch(config).await?;
//! for result in &outcome.saved {
//!     println!("{} <- {}", result.local_path.display(), result.source_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod discovery;
pub mod fetch_engine;
pub mod pipeline;
pub mod utils;

pub use config::{ContentFilter, FetchConfig, FetchConfigBuilder};
pub use discovery::{BingProvider, Candidate, CandidateStream, DiscoveryError, SearchProvider};
pub use fetch_engine::{CandidateError, FetchError, FetchOutcome, FetchResult, ImageFetcher};
pub use pipeline::{
    ImageDescriber, KeywordExtractor, Pipeline, PipelineError, PipelineReport, SpeechSynthesizer,
};

use tokio_util::sync::CancellationToken;

/// Run one fetch to completion with a fresh cancellation token.
pub async fn fetch(config: FetchConfig) -> Result<FetchOutcome, FetchError> {
    let fetcher = ImageFetcher::new(config)?;
    fetcher.run(CancellationToken::new()).await
}
