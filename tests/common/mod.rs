//! Test utilities and helper functions for the imagescrape test suite

use mockito::{Mock, Server};
use std::io::Write;

/// A plausible image body: JPEG magic followed by seed-derived filler,
/// comfortably above the 1 KB minimum. Different seeds produce different
/// content hashes.
#[allow(dead_code)]
pub fn fake_jpeg(seed: u8) -> Vec<u8> {
    let mut body = vec![0xFF, 0xD8, 0xFF, 0xE0];
    body.extend((0..2000u32).map(|i| (i as u8).wrapping_add(seed)));
    body.extend([0xFF, 0xD9]);
    body
}

/// Builds a Bing-style results fragment: one anchor per URL, each with
/// the HTML-escaped JSON metadata attribute the parser extracts.
#[allow(dead_code)]
pub fn search_page_body(image_urls: &[String]) -> String {
    let anchors: Vec<String> = image_urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            format!(
                r#"<a class="iusc" m="{{&quot;murl&quot;:&quot;{url}&quot;,&quot;turl&quot;:&quot;https://tse.example/th{i}&quot;}}" href="/images/search?view=detailV2"></a>"#
            )
        })
        .collect();
    format!("<div class=\"dgControl\">{}</div>", anchors.join("\n"))
}

/// Mocks the search endpoint: one page of candidates at offset 0,
/// empty pages for every other offset.
#[allow(dead_code)]
pub fn mock_single_results_page(server: &mut Server, image_urls: &[String]) -> Mock {
    // The specific offset-0 mock must be registered before the catch-all:
    // mockito serves the earliest-registered mock when several match.
    let results = server
        .mock("GET", "/images/async")
        .match_query(mockito::Matcher::UrlEncoded("first".into(), "0".into()))
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(search_page_body(image_urls))
        .create();

    server
        .mock("GET", "/images/async")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<div></div>")
        .create();

    results
}

/// Creates a mock image endpoint with the given body and content type.
#[allow(dead_code)]
pub fn mock_image(server: &mut Server, path: &str, content_type: &str, body: &[u8]) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", content_type)
        .with_body(body)
        .create()
}

/// Mocks an image endpoint that holds its response for `delay` before
/// sending a valid body, keeping the client stuck mid-download.
#[allow(dead_code)]
pub fn mock_stalled_image(server: &mut Server, path: &str, delay: std::time::Duration) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_chunked_body(move |writer| {
            std::thread::sleep(delay);
            writer.write_all(&fake_jpeg(0))
        })
        .create()
}

/// Creates a mock image endpoint that returns an error status.
#[allow(dead_code)]
pub fn mock_image_error(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create()
}
