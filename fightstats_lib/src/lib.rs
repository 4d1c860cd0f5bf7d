//! Crawling and aggregation layer for fightstats.
//!
//! Wraps the pure extraction core (`fightstats_extract`) with an HTTP page
//! client, a concurrent crawler with link discovery, the identity-keyed
//! roster aggregator, and the final JSON batch writer.

pub mod client;
pub mod crawler;
pub mod error;
pub mod output;
pub mod roster;
pub mod user_agent;

pub use fightstats_extract;
pub use fightstats_extract::types;
pub use fightstats_extract::{extract_page, PageKind, PageRecord, UrlFilter};

pub use client::{DelayRange, PageClient};
pub use crawler::{crawl, CrawlConfig, CrawlSummary, DEFAULT_SEED};
pub use error::CrawlError;
pub use roster::{Roster, UpsertOutcome};
