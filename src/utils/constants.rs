//! Shared configuration constants for imagescrape
//!
//! Default values used throughout the codebase to ensure consistency
//! and avoid magic numbers.

/// Default number of images to materialize per run: 10
pub const DEFAULT_LIMIT: usize = 10;

/// Default per-request timeout: 60 seconds
///
/// Applies to both search page requests and individual image downloads.
/// Image hosts vary wildly in responsiveness; a generous default avoids
/// rejecting slow-but-valid hosts while still bounding every request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default maximum image size: 10 MB
///
/// Bodies larger than this are rejected mid-download. Anything bigger is
/// almost never a search-result photo and would dominate the run's
/// bandwidth budget.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Default minimum image size: 1 KB
///
/// Filters out broken-image placeholders, tracking pixels, and empty
/// bodies that some hosts return with a 200 status.
pub const DEFAULT_MIN_IMAGE_BYTES: usize = 1024;

/// Default number of concurrent download workers: 6
///
/// Keeps the fetcher a good citizen toward image hosts while still
/// overlapping network latency. Users can adjust via `max_workers`:
/// - Increase for large limits against fast hosts
/// - Decrease to 1 for fully serial, minimal-footprint fetching
pub const DEFAULT_MAX_WORKERS: usize = 6;

/// Safety ceiling on search result pages per run: 10
///
/// Discovery stops after this many pages even if the provider claims
/// more results. Prevents unbounded paging on queries where most
/// candidates fail validation.
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Number of results requested per search page
pub const SEARCH_PAGE_SIZE: usize = 35;

/// Retry attempts for the initial discovery request: 3
pub const DEFAULT_DISCOVERY_RETRIES: u32 = 3;

/// Backoff between discovery retry attempts (milliseconds)
pub const DISCOVERY_RETRY_BACKOFF_MS: u64 = 500;

/// Retry attempts for a transient per-candidate download failure: 1
pub const DEFAULT_DOWNLOAD_RETRIES: u32 = 1;

/// Delay before retrying a transient download failure (milliseconds)
pub const DOWNLOAD_RETRY_DELAY_MS: u64 = 250;

/// Browser-like user agent for search and image requests
///
/// Image search providers serve a degraded (or empty) results page to
/// clients that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
