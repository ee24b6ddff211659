//! The fetch engine
//!
//! Consumes the candidate stream until the requested number of images is
//! on disk or the provider runs dry. Discovery stays sequential; downloads
//! run on a bounded worker pool. The in-flight window never exceeds the
//! number of still-needed successes, so the run can never save more than
//! `limit` images.

use parking_lot::Mutex;
use reqwest::Client;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::config::FetchConfig;
use crate::discovery::{BingProvider, Candidate, CandidateStream, SearchProvider};
use crate::utils::extension_for_content_type;

use super::directory::resolve_output_directory;
use super::download::download_with_retry;
use super::errors::{CandidateError, FetchError};
use super::persist::{allocate_file_name, persist_atomic};
use super::types::{FetchOutcome, FetchResult};

/// State shared across download workers, guarded by one mutex.
///
/// Held only across the dedupe check and filename allocation, never
/// across an await point.
#[derive(Default)]
struct RunState {
    /// xxh3-128 digests of every body saved this run
    hashes: HashSet<u128>,
    /// Sequential counter feeding `Image_<n>.<ext>` names
    next_index: usize,
}

/// How one candidate's download attempt resolved.
enum WorkerOutcome {
    Saved(FetchResult),
    Duplicate,
    Failed(CandidateError),
    /// The run was cancelled before this candidate's download resolved.
    Abandoned,
}

/// Running tallies for the outcome, keyed saves by discovery index.
#[derive(Default)]
struct Tally {
    saved: Vec<(usize, FetchResult)>,
    attempted: usize,
    succeeded: usize,
    failed: usize,
    duplicates: usize,
}

impl Tally {
    fn record(&mut self, index: usize, outcome: WorkerOutcome) {
        match outcome {
            WorkerOutcome::Saved(result) => {
                self.attempted += 1;
                self.succeeded += 1;
                self.saved.push((index, result));
            }
            WorkerOutcome::Duplicate => {
                self.attempted += 1;
                self.duplicates += 1;
            }
            WorkerOutcome::Failed(e) => {
                self.attempted += 1;
                self.failed += 1;
                log::debug!("candidate #{index} failed: {e}");
            }
            // Never resolved; keeps attempted == succeeded + failed + duplicates.
            WorkerOutcome::Abandoned => {}
        }
    }

    fn into_outcome(mut self, cancelled: bool) -> FetchOutcome {
        // Saved results are reported in discovery order, not completion order.
        self.saved.sort_by_key(|(index, _)| *index);
        FetchOutcome {
            saved: self.saved.into_iter().map(|(_, result)| result).collect(),
            attempted: self.attempted,
            succeeded: self.succeeded,
            failed: self.failed,
            duplicates: self.duplicates,
            cancelled,
        }
    }
}

/// Bulk image fetcher: discover, download, validate, dedupe, persist.
pub struct ImageFetcher<P: SearchProvider = BingProvider> {
    config: FetchConfig,
    provider: P,
    client: Client,
}

impl ImageFetcher<BingProvider> {
    /// Create a fetcher against the default provider.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = build_client(&config)?;
        let provider = BingProvider::new(client.clone());
        Ok(Self {
            config,
            provider,
            client,
        })
    }
}

impl<P: SearchProvider> ImageFetcher<P> {
    /// Create a fetcher with a custom search provider.
    pub fn with_provider(config: FetchConfig, provider: P) -> Result<Self, FetchError> {
        let client = build_client(&config)?;
        Ok(Self {
            config,
            provider,
            client,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Run the fetch to completion, honoring `cancel`.
    ///
    /// Fatal errors (`Directory`, `Discovery`) return `Err`; everything
    /// else lands in the returned [`FetchOutcome`]. On cancellation the
    /// outcome carries whatever succeeded so far with `cancelled` set.
    #[tracing::instrument(skip(self, cancel), fields(query = %self.config.query(), limit = self.config.limit()))]
    pub async fn run(&self, cancel: CancellationToken) -> Result<FetchOutcome, FetchError> {
        let dir = resolve_output_directory(&self.config).await?;
        log::info!(
            "downloading up to {} images for \"{}\" into {}",
            self.config.limit(),
            self.config.query(),
            dir.display()
        );

        let mut stream = CandidateStream::new(&self.provider, &self.config);
        let semaphore = Arc::new(Semaphore::new(self.config.max_workers()));
        let state = Arc::new(Mutex::new(RunState::default()));

        let mut join_set: JoinSet<(usize, WorkerOutcome)> = JoinSet::new();
        let mut tally = Tally::default();
        let mut cancelled = false;
        let mut discovery_done = false;
        let mut next_candidate_index = 0usize;

        loop {
            // Top up the in-flight window: one unresolved candidate per
            // still-needed success.
            while !cancelled
                && !discovery_done
                && tally.succeeded + join_set.len() < self.config.limit()
            {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => {
                        cancelled = true;
                    }
                    candidate = stream.next() => match candidate? {
                        Some(candidate) => {
                            let index = next_candidate_index;
                            next_candidate_index += 1;
                            join_set.spawn(spawn_worker(
                                index,
                                candidate,
                                self.client.clone(),
                                self.config.clone(),
                                dir.clone(),
                                Arc::clone(&state),
                                Arc::clone(&semaphore),
                                cancel.clone(),
                            ));
                        }
                        None => {
                            discovery_done = true;
                        }
                    },
                }
            }

            if cancelled {
                // Workers watch the token themselves and wind down at
                // their next await; one already past its download is
                // allowed to finish writing so every file on disk is
                // reported in the outcome.
                while let Some(joined) = join_set.join_next().await {
                    if let Ok((index, outcome)) = joined {
                        tally.record(index, outcome);
                    }
                }
                break;
            }

            if join_set.is_empty() {
                break;
            }

            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    cancelled = true;
                }
                joined = join_set.join_next() => match joined {
                    Some(Ok((index, outcome))) => tally.record(index, outcome),
                    Some(Err(e)) if e.is_panic() => {
                        return Err(FetchError::Worker(e.to_string()));
                    }
                    Some(Err(_)) | None => {}
                },
            }
        }

        let outcome = tally.into_outcome(cancelled);
        log::info!(
            "fetch finished: {} saved, {} failed, {} duplicates ({} attempted)",
            outcome.succeeded,
            outcome.failed,
            outcome.duplicates,
            outcome.attempted
        );
        Ok(outcome)
    }
}

fn build_client(config: &FetchConfig) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(config.user_agent().to_string())
        .timeout(config.timeout())
        .build()
        .map_err(FetchError::Client)
}

async fn spawn_worker(
    index: usize,
    candidate: Candidate,
    client: Client,
    config: FetchConfig,
    dir: PathBuf,
    state: Arc<Mutex<RunState>>,
    semaphore: Arc<Semaphore>,
    cancel: CancellationToken,
) -> (usize, WorkerOutcome) {
    let outcome =
        process_candidate(candidate, &client, &config, &dir, &state, semaphore, cancel).await;
    (index, outcome)
}

async fn process_candidate(
    candidate: Candidate,
    client: &Client,
    config: &FetchConfig,
    dir: &std::path::Path,
    state: &Mutex<RunState>,
    semaphore: Arc<Semaphore>,
    cancel: CancellationToken,
) -> WorkerOutcome {
    let _permit = tokio::select! {
        biased;
        () = cancel.cancelled() => return WorkerOutcome::Abandoned,
        permit = semaphore.acquire_owned() => match permit {
            Ok(permit) => permit,
            Err(_) => return WorkerOutcome::Abandoned,
        },
    };

    let image = tokio::select! {
        biased;
        () = cancel.cancelled() => return WorkerOutcome::Abandoned,
        downloaded = download_with_retry(client, &candidate.source_url, config) => {
            match downloaded {
                Ok(image) => image,
                Err(e) => {
                    log::debug!("rejected {}: {e}", candidate.source_url);
                    return WorkerOutcome::Failed(e);
                }
            }
        }
    };

    // Past this point the worker runs to completion even when cancelled:
    // the hash/allocate/persist tail is short, and letting it finish
    // guarantees no file lands on disk unreported.
    let digest = xxhash_rust::xxh3::xxh3_128(&image.bytes);
    let file_name = {
        let mut run = state.lock();
        if !run.hashes.insert(digest) {
            log::debug!("duplicate body from {}", candidate.source_url);
            return WorkerOutcome::Duplicate;
        }
        allocate_file_name(
            dir,
            &mut run.next_index,
            extension_for_content_type(&image.content_type),
        )
    };

    let byte_size = image.bytes.len() as u64;
    let content_type = image.content_type;
    match persist_atomic(dir, &file_name, image.bytes).await {
        Ok(local_path) => {
            log::debug!("saved {} <- {}", local_path.display(), candidate.source_url);
            WorkerOutcome::Saved(FetchResult {
                source_url: candidate.source_url,
                local_path,
                byte_size,
                content_type,
            })
        }
        Err(e) => {
            // The body never landed; forget its digest so an identical
            // later candidate can still be saved.
            state.lock().hashes.remove(&digest);
            WorkerOutcome::Failed(e)
        }
    }
}
