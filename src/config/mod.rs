//! Configuration module for bulk image fetching
//!
//! This module provides the `FetchConfig` struct and its type-safe builder
//! for configuring fetch runs with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{FetchConfigBuilder, WithOutputDir, WithQuery};
pub use types::{ContentFilter, FetchConfig};
