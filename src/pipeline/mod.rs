//! Topic-to-speech pipeline
//!
//! Narrow async seams for the language-model, vision, and text-to-speech
//! collaborators, plus the sequencing that runs them around the fetcher.

// Sub-modules
pub mod runner;
pub mod traits;

// Re-exports for public API
pub use runner::{NarratedImage, Pipeline, PipelineError, PipelineReport};
pub use traits::{ImageDescriber, KeywordExtractor, SpeechSynthesizer};
