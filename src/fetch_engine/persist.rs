//! Atomic persistence of accepted images
//!
//! Bodies are written to a temp file in the target directory and renamed
//! into place, so a crash mid-write never leaves a partial file at the
//! final name. Abandoned temp files clean themselves up on drop.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::errors::CandidateError;

/// Pick the next free `Image_<n>.<ext>` name in the directory.
///
/// `next_index` is the run's shared counter; callers hold the run lock
/// while allocating so two workers can never claim the same name.
/// Pre-existing files (force_replace off) are skipped, never overwritten.
pub fn allocate_file_name(dir: &Path, next_index: &mut usize, extension: &str) -> String {
    loop {
        *next_index += 1;
        let name = format!("Image_{}.{}", *next_index, extension);
        if !dir.join(&name).exists() {
            return name;
        }
    }
}

/// Write `bytes` to `dir/file_name` atomically.
pub async fn persist_atomic(
    dir: &Path,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<PathBuf, CandidateError> {
    let dir = dir.to_path_buf();
    let final_path = dir.join(file_name);

    let path = tokio::task::spawn_blocking(move || -> std::io::Result<PathBuf> {
        let mut temp = tempfile::NamedTempFile::new_in(&dir)?;
        temp.write_all(&bytes)?;
        temp.flush()?;
        temp.persist(&final_path).map_err(|e| e.error)?;
        Ok(final_path)
    })
    .await
    .map_err(|e| CandidateError::Io(std::io::Error::other(e)))??;

    Ok(path)
}
