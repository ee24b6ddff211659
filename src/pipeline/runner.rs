//! Topic-to-speech sequencing
//!
//! extract keywords -> fetch images -> describe each image -> synthesize
//! each description. Only the fetch step belongs to this crate; the other
//! three are reached through the trait seams in [`super::traits`].
//! Per-image description/synthesis failures are logged and skipped, in
//! keeping with the fetcher's non-fatal per-candidate policy.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::{ContentFilter, FetchConfig};
use crate::discovery::SearchProvider;
use crate::fetch_engine::{FetchError, FetchOutcome, ImageFetcher};

use super::traits::{ImageDescriber, KeywordExtractor, SpeechSynthesizer};

/// Fatal pipeline error. Per-image narration failures are not errors;
/// they simply leave that image out of the report.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("keyword extraction failed: {0}")]
    Keywords(#[source] anyhow::Error),

    #[error("invalid fetch configuration: {0}")]
    Config(#[source] anyhow::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// One image that made it all the way through the pipeline.
#[derive(Debug, Clone)]
pub struct NarratedImage {
    pub image_path: PathBuf,
    pub description: String,
    pub audio_path: PathBuf,
}

/// Everything a pipeline run produced.
#[derive(Debug)]
pub struct PipelineReport {
    /// Keyword string the fetch ran with
    pub keywords: String,
    /// The fetch outcome, counts and all
    pub outcome: FetchOutcome,
    /// Images successfully described and narrated
    pub narrated: Vec<NarratedImage>,
}

/// Sequences the external collaborators around the fetcher.
pub struct Pipeline<K, D, S> {
    extractor: K,
    describer: D,
    synthesizer: S,
}

impl<K, D, S> Pipeline<K, D, S>
where
    K: KeywordExtractor,
    D: ImageDescriber,
    S: SpeechSynthesizer,
{
    pub fn new(extractor: K, describer: D, synthesizer: S) -> Self {
        Self {
            extractor,
            describer,
            synthesizer,
        }
    }

    /// Run the full topic-to-speech pipeline against the default provider.
    ///
    /// Audio files land next to their images, same stem with an `.mp3`
    /// extension.
    pub async fn run(
        &self,
        topic: &str,
        output_dir: &Path,
        limit: usize,
        cancel: CancellationToken,
    ) -> Result<PipelineReport, PipelineError> {
        let keywords = self.keywords_for(topic).await?;
        let config = self.fetch_config(&keywords, output_dir, limit)?;
        let fetcher = ImageFetcher::new(config)?;
        let outcome = fetcher.run(cancel).await?;
        self.narrate(keywords, outcome).await
    }

    /// Same sequencing with a caller-supplied search provider.
    pub async fn run_with_provider<P: SearchProvider>(
        &self,
        topic: &str,
        output_dir: &Path,
        limit: usize,
        provider: P,
        cancel: CancellationToken,
    ) -> Result<PipelineReport, PipelineError> {
        let keywords = self.keywords_for(topic).await?;
        let config = self.fetch_config(&keywords, output_dir, limit)?;
        let fetcher = ImageFetcher::with_provider(config, provider)?;
        let outcome = fetcher.run(cancel).await?;
        self.narrate(keywords, outcome).await
    }

    async fn keywords_for(&self, topic: &str) -> Result<String, PipelineError> {
        let keywords = self
            .extractor
            .extract_keywords(topic)
            .await
            .map_err(PipelineError::Keywords)?;
        log::info!("extracted keywords: \"{keywords}\"");
        Ok(keywords)
    }

    fn fetch_config(
        &self,
        keywords: &str,
        output_dir: &Path,
        limit: usize,
    ) -> Result<FetchConfig, PipelineError> {
        FetchConfig::builder()
            .output_dir(output_dir)
            .query(keywords)
            .limit(limit)
            .content_filter(ContentFilter::Photo)
            .build()
            .map_err(PipelineError::Config)
    }

    async fn narrate(
        &self,
        keywords: String,
        outcome: FetchOutcome,
    ) -> Result<PipelineReport, PipelineError> {
        let mut narrated = Vec::with_capacity(outcome.saved.len());
        for result in &outcome.saved {
            let description = match self.describer.describe(&result.local_path).await {
                Ok(description) => description,
                Err(e) => {
                    log::warn!(
                        "skipping narration for {}: description failed: {e}",
                        result.local_path.display()
                    );
                    continue;
                }
            };

            let audio_path = result.local_path.with_extension("mp3");
            if let Err(e) = self.synthesizer.synthesize(&description, &audio_path).await {
                log::warn!(
                    "skipping narration for {}: synthesis failed: {e}",
                    result.local_path.display()
                );
                continue;
            }

            narrated.push(NarratedImage {
                image_path: result.local_path.clone(),
                description,
                audio_path,
            });
        }

        Ok(PipelineReport {
            keywords,
            outcome,
            narrated,
        })
    }
}
