//! Output directory resolution
//!
//! The run writes into `output_dir/<slug(query)>`. Any failure here is
//! fatal for the whole request and happens before any network activity.

use std::path::PathBuf;

use crate::config::FetchConfig;
use crate::utils::query_slug;

use super::errors::FetchError;

/// Resolve (and create) the target directory for a run.
///
/// With `force_replace` set, a pre-existing directory is removed
/// recursively first, so afterwards it contains only this run's files.
pub async fn resolve_output_directory(config: &FetchConfig) -> Result<PathBuf, FetchError> {
    let dir = config.output_dir().join(query_slug(config.query()));

    if config.force_replace() && tokio::fs::metadata(&dir).await.is_ok() {
        log::info!("force_replace set, removing existing {}", dir.display());
        tokio::fs::remove_dir_all(&dir)
            .await
            .map_err(|source| FetchError::Directory {
                path: dir.clone(),
                source,
            })?;
    }

    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|source| FetchError::Directory {
            path: dir.clone(),
            source,
        })?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;
    use tempfile::TempDir;

    fn config_for(root: &std::path::Path, query: &str, force_replace: bool) -> FetchConfig {
        FetchConfig::builder()
            .output_dir(root)
            .query(query)
            .force_replace(force_replace)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn creates_slugged_query_directory() {
        let root = TempDir::new().unwrap();
        let config = config_for(root.path(), "red panda", false);

        let dir = resolve_output_directory(&config).await.unwrap();
        assert_eq!(dir, root.path().join("red_panda"));
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn force_replace_wipes_existing_contents() {
        let root = TempDir::new().unwrap();
        let existing = root.path().join("dog");
        tokio::fs::create_dir_all(&existing).await.unwrap();
        tokio::fs::write(existing.join("stale.jpg"), b"old").await.unwrap();

        let config = config_for(root.path(), "dog", true);
        let dir = resolve_output_directory(&config).await.unwrap();

        assert!(dir.is_dir());
        assert!(!dir.join("stale.jpg").exists());
    }

    #[tokio::test]
    async fn without_force_replace_existing_files_survive() {
        let root = TempDir::new().unwrap();
        let existing = root.path().join("dog");
        tokio::fs::create_dir_all(&existing).await.unwrap();
        tokio::fs::write(existing.join("keep.jpg"), b"old").await.unwrap();

        let config = config_for(root.path(), "dog", false);
        let dir = resolve_output_directory(&config).await.unwrap();

        assert!(dir.join("keep.jpg").exists());
    }

    #[tokio::test]
    async fn unusable_path_is_a_directory_error() {
        let root = TempDir::new().unwrap();
        // Occupy the target name with a plain file.
        tokio::fs::write(root.path().join("dog"), b"not a dir").await.unwrap();

        let config = config_for(root.path(), "dog", false);
        let err = resolve_output_directory(&config).await.unwrap_err();
        assert!(matches!(err, FetchError::Directory { .. }));
    }
}
