//! Per-candidate image download
//!
//! Streams the body with the size cap enforced mid-download, so an
//! oversized or lying host can never balloon memory. Validation order:
//! status, content type, declared size, streamed size, minimum size.

use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::utils::{DOWNLOAD_RETRY_DELAY_MS, is_image_content_type};

use super::errors::CandidateError;

/// A validated image body held in memory until it is persisted.
#[derive(Debug)]
pub struct DownloadedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Download one candidate, retrying transient failures.
///
/// Retries are bounded by `config.download_retries()` with a short fixed
/// delay; permanent failures (4xx, wrong content type, size violations)
/// return immediately.
pub async fn download_with_retry(
    client: &Client,
    url: &str,
    config: &FetchConfig,
) -> Result<DownloadedImage, CandidateError> {
    let max_attempts = config.download_retries() + 1;
    let mut attempt = 0;

    loop {
        attempt += 1;
        match download_image(client, url, config).await {
            Ok(image) => return Ok(image),
            Err(e) if attempt < max_attempts && e.is_transient() => {
                log::debug!("transient failure for {url} ({e}), retrying");
                tokio::time::sleep(Duration::from_millis(DOWNLOAD_RETRY_DELAY_MS)).await;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn download_image(
    client: &Client,
    url: &str,
    config: &FetchConfig,
) -> Result<DownloadedImage, CandidateError> {
    let response = client
        .get(url)
        .header(
            "Accept",
            "image/avif,image/webp,image/apng,image/*,*/*;q=0.8",
        )
        .send()
        .await
        .map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(CandidateError::Status {
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    if !is_image_content_type(&content_type) {
        return Err(CandidateError::NotAnImage { content_type });
    }

    // Enforce the limit from the declared length BEFORE downloading.
    let max_bytes = config.max_image_bytes();
    let expected_size = response.content_length().unwrap_or(0) as usize;
    if expected_size > max_bytes {
        return Err(CandidateError::TooLarge {
            size: expected_size,
            limit: max_bytes,
        });
    }

    // Stream with size checking as the second line of defense.
    let mut buffer = Vec::with_capacity(expected_size);
    let mut stream = response.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(request_error)?;

        let new_total = buffer.len() + chunk.len();
        if new_total > max_bytes {
            return Err(CandidateError::TooLarge {
                size: new_total,
                limit: max_bytes,
            });
        }
        buffer.extend_from_slice(&chunk);
    }

    if buffer.len() < config.min_image_bytes() {
        return Err(CandidateError::TooSmall {
            size: buffer.len(),
            limit: config.min_image_bytes(),
        });
    }

    Ok(DownloadedImage {
        bytes: buffer,
        content_type,
    })
}

fn request_error(e: reqwest::Error) -> CandidateError {
    if e.is_timeout() {
        CandidateError::Timeout
    } else {
        CandidateError::Request(e)
    }
}
