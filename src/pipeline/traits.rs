//! Trait seams for the external collaborators
//!
//! The surrounding product wires three opaque third-party calls around the
//! fetcher: keyword extraction from a topic, vision description of each
//! saved image, and speech synthesis of each description. The crate only
//! defines the seams; concrete clients live with the caller.

use async_trait::async_trait;
use std::path::Path;

/// Turns a free-form topic into a search keyword string.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract_keywords(&self, topic: &str) -> anyhow::Result<String>;
}

/// Produces a textual description of an image on disk.
#[async_trait]
pub trait ImageDescriber: Send + Sync {
    async fn describe(&self, image_path: &Path) -> anyhow::Result<String>;
}

/// Renders text as speech into an audio file.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, audio_path: &Path) -> anyhow::Result<()>;
}
