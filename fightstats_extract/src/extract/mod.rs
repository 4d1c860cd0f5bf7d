//! Field extractors: locate tagged regions and emit typed partial records.

mod bio;
mod history;
mod stats;

use scraper::Html;

use crate::classify::{PageKind, UrlFilter};
use crate::identity;
use crate::types::FighterRecord;

pub use self::bio::extract_bio;
pub use self::history::fight_history;
pub use self::stats::{clinch_stats, ground_stats, striking_stats};

/// A partial record extracted from one page visit, keyed for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    /// Normalized identity key.
    pub key: String,
    /// Whatever this page yielded; fields the page does not carry stay at
    /// their defaults.
    pub record: FighterRecord,
}

/// Runs the extractor matching `url` over an already-parsed document.
///
/// Returns `None` when the URL classifies to no known page type or when no
/// identity can be derived; such pages contribute nothing.
pub fn extract_document(url: &str, doc: &Html, filter: &UrlFilter) -> Option<PageRecord> {
    match filter.classify(url)? {
        PageKind::FighterStats => {
            let mut record = FighterRecord::default();
            extract_bio(doc, &mut record);
            record.striking_stats = striking_stats(doc);
            record.clinch_stats = clinch_stats(doc);
            record.ground_stats = ground_stats(doc);
            let key =
                identity::normalize(&format!("{} {}", record.first_name, record.last_name));
            if key.is_empty() {
                tracing::debug!(url, "stats page carried no fighter name");
                return None;
            }
            Some(PageRecord { key, record })
        }
        PageKind::FightHistory => {
            let key = identity::key_from_url(url)?;
            let mut record = FighterRecord::default();
            record.fights = fight_history(doc);
            Some(PageRecord { key, record })
        }
    }
}

/// Convenience wrapper over [`extract_document`] for a raw page body. The
/// parser is lenient: malformed markup still produces a tree, and a tree
/// with none of the expected structure extracts nothing.
pub fn extract_page(url: &str, body: &str, filter: &UrlFilter) -> Option<PageRecord> {
    if filter.classify(url).is_none() {
        return None;
    }
    let doc = Html::parse_document(body);
    extract_document(url, &doc, filter)
}
