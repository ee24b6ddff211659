//! Candidate stream behavior against a scripted provider, plus
//! `BingProvider` parsing over HTTP.

mod common;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

use imagescrape::discovery::{
    BingProvider, Candidate, CandidateStream, DiscoveryError, PageRequest, SearchPage,
    SearchProvider,
};
use imagescrape::FetchConfig;

/// Replays a fixed sequence of page results, recording each request's offset.
struct ScriptedProvider {
    pages: Mutex<VecDeque<Result<SearchPage, DiscoveryError>>>,
    offsets: Mutex<Vec<usize>>,
}

impl ScriptedProvider {
    fn new(pages: Vec<Result<SearchPage, DiscoveryError>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            offsets: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SearchProvider for ScriptedProvider {
    async fn fetch_page(&self, request: PageRequest<'_>) -> Result<SearchPage, DiscoveryError> {
        self.offsets.lock().push(request.offset);
        self.pages
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(SearchPage::default()))
    }
}

fn candidate(url: &str) -> Candidate {
    Candidate {
        source_url: url.to_string(),
        thumbnail_url: None,
        content_type_hint: None,
    }
}

fn page(urls: &[&str]) -> SearchPage {
    SearchPage {
        candidates: urls.iter().map(|u| candidate(u)).collect(),
    }
}

fn stream_config(max_pages: usize, discovery_retries: u32) -> FetchConfig {
    FetchConfig::builder()
        .output_dir("./unused")
        .query("dog")
        .max_pages(max_pages)
        .discovery_retries(discovery_retries)
        .build()
        .unwrap()
}

async fn drain<P: SearchProvider>(
    stream: &mut CandidateStream<'_, P>,
) -> Result<Vec<String>, DiscoveryError> {
    let mut urls = Vec::new();
    while let Some(c) = stream.next().await? {
        urls.push(c.source_url);
    }
    Ok(urls)
}

#[tokio::test]
async fn pages_are_pulled_on_demand() {
    let provider = ScriptedProvider::new(vec![
        Ok(page(&["https://a/1.jpg", "https://a/2.jpg"])),
        Ok(page(&["https://a/3.jpg"])),
        Ok(SearchPage::default()),
    ]);
    let config = stream_config(10, 1);
    let mut stream = CandidateStream::new(&provider, &config);

    // Consuming the first two candidates needs only one page request.
    assert!(stream.next().await.unwrap().is_some());
    assert!(stream.next().await.unwrap().is_some());
    assert_eq!(provider.offsets.lock().len(), 1);

    assert_eq!(
        stream.next().await.unwrap().unwrap().source_url,
        "https://a/3.jpg"
    );
    assert!(stream.next().await.unwrap().is_none());

    // Offsets advance by the number of results on each page.
    assert_eq!(*provider.offsets.lock(), vec![0, 2, 3]);
}

#[tokio::test]
async fn urls_repeated_across_pages_are_skipped() {
    let provider = ScriptedProvider::new(vec![
        Ok(page(&["https://a/1.jpg", "https://a/2.jpg"])),
        Ok(page(&["https://a/2.jpg", "https://a/3.jpg"])),
        Ok(SearchPage::default()),
    ]);
    let config = stream_config(10, 1);
    let mut stream = CandidateStream::new(&provider, &config);

    let urls = drain(&mut stream).await.unwrap();
    assert_eq!(urls, vec!["https://a/1.jpg", "https://a/2.jpg", "https://a/3.jpg"]);
}

#[tokio::test]
async fn fully_duplicate_page_ends_the_stream() {
    let provider = ScriptedProvider::new(vec![
        Ok(page(&["https://a/1.jpg"])),
        Ok(page(&["https://a/1.jpg"])),
        // Never requested: the all-duplicates page above ends discovery.
        Ok(page(&["https://a/2.jpg"])),
    ]);
    let config = stream_config(10, 1);
    let mut stream = CandidateStream::new(&provider, &config);

    let urls = drain(&mut stream).await.unwrap();
    assert_eq!(urls, vec!["https://a/1.jpg"]);
    assert_eq!(provider.offsets.lock().len(), 2);
}

#[tokio::test]
async fn page_ceiling_bounds_discovery() {
    let provider = ScriptedProvider::new(vec![
        Ok(page(&["https://a/1.jpg"])),
        Ok(page(&["https://a/2.jpg"])),
        Ok(page(&["https://a/3.jpg"])),
    ]);
    let config = stream_config(2, 1);
    let mut stream = CandidateStream::new(&provider, &config);

    let urls = drain(&mut stream).await.unwrap();
    assert_eq!(urls.len(), 2);
    assert_eq!(provider.offsets.lock().len(), 2);
}

#[tokio::test]
async fn first_page_transient_failure_is_retried() {
    let provider = ScriptedProvider::new(vec![
        Err(DiscoveryError::Status { status: 503 }),
        Ok(page(&["https://a/1.jpg"])),
        Ok(SearchPage::default()),
    ]);
    let config = stream_config(10, 3);
    let mut stream = CandidateStream::new(&provider, &config);

    let urls = drain(&mut stream).await.unwrap();
    assert_eq!(urls, vec!["https://a/1.jpg"]);
}

#[tokio::test]
async fn first_page_exhausted_retries_is_fatal() {
    let provider = ScriptedProvider::new(vec![
        Err(DiscoveryError::Status { status: 503 }),
        Err(DiscoveryError::Status { status: 503 }),
    ]);
    let config = stream_config(10, 2);
    let mut stream = CandidateStream::new(&provider, &config);

    let err = stream.next().await.unwrap_err();
    assert!(matches!(err, DiscoveryError::Status { status: 503 }));
    // The stream stays exhausted afterwards.
    assert!(stream.next().await.unwrap().is_none());
}

#[tokio::test]
async fn later_page_failure_ends_stream_quietly() {
    let provider = ScriptedProvider::new(vec![
        Ok(page(&["https://a/1.jpg"])),
        Err(DiscoveryError::Status { status: 500 }),
    ]);
    let config = stream_config(10, 1);
    let mut stream = CandidateStream::new(&provider, &config);

    let urls = drain(&mut stream).await.unwrap();
    assert_eq!(urls, vec!["https://a/1.jpg"]);
}

#[tokio::test]
async fn bing_provider_parses_results_over_http() {
    let mut server = mockito::Server::new_async().await;
    let body = common::search_page_body(&[
        "https://host.example/cat.jpg".to_string(),
        "https://host.example/dog.png".to_string(),
    ]);
    server
        .mock("GET", "/images/async")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create();

    let provider = BingProvider::new(reqwest::Client::new()).with_base_url(server.url());
    let page = provider
        .fetch_page(PageRequest {
            query: "cat",
            offset: 0,
            count: 35,
            adult_filter: false,
            content_filter: None,
        })
        .await
        .unwrap();

    assert_eq!(page.candidates.len(), 2);
    assert_eq!(page.candidates[0].source_url, "https://host.example/cat.jpg");
    assert!(page.candidates[0].thumbnail_url.is_some());
}

#[tokio::test]
async fn bing_provider_surfaces_http_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/images/async")
        .match_query(mockito::Matcher::Any)
        .with_status(429)
        .create();

    let provider = BingProvider::new(reqwest::Client::new()).with_base_url(server.url());
    let err = provider
        .fetch_page(PageRequest {
            query: "cat",
            offset: 0,
            count: 35,
            adult_filter: false,
            content_filter: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DiscoveryError::Status { status: 429 }));
    assert!(err.is_transient());
}
