//! Content-type helpers for image downloads
//!
//! Image hosts are inconsistent about both `Content-Type` headers and URL
//! extensions, so these helpers normalize aggressively and default to JPEG
//! when nothing better is known.

/// Check whether a `Content-Type` header value denotes an image.
///
/// Only the media type matters; charset and other parameters are ignored.
#[must_use]
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .is_some_and(|mime| mime.starts_with("image/"))
}

/// Map a `Content-Type` header value to a file extension.
///
/// Unknown image subtypes fall back to `jpg`, the overwhelmingly most
/// common case for search-result photos.
#[must_use]
pub fn extension_for_content_type(content_type: &str) -> &'static str {
    let mime = content_type
        .split(';')
        .next()
        .map(str::trim)
        .unwrap_or_default();

    match mime {
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" | "image/x-ms-bmp" => "bmp",
        "image/svg+xml" => "svg",
        "image/tiff" => "tif",
        "image/avif" => "avif",
        _ => "jpg",
    }
}

/// Best-effort content-type guess from a URL's path extension.
///
/// Used only as a hint on discovered candidates; the authoritative type
/// is always the download response's `Content-Type` header.
#[must_use]
pub fn content_type_hint_for_url(url: &str) -> Option<&'static str> {
    let path = url.split(['?', '#']).next()?;
    let ext = path.rsplit('.').next()?;

    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}
