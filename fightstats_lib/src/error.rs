//! Error types for the crawling layer.

use reqwest::StatusCode;

/// Errors produced while fetching pages or writing the final batch.
///
/// Per-page fetch errors are logged and absorbed by the crawler; only
/// output failures terminate a run.
#[derive(thiserror::Error, Debug)]
pub enum CrawlError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}")]
    HttpStatus { status: StatusCode },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
