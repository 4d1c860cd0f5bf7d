//! Structural extraction core for fighter pages.
//!
//! Pure and synchronous: given a page URL and its markup, classify the
//! page, locate the tagged regions, and emit typed partial records keyed
//! by normalized fighter identity. Fetching, aggregation, and output live
//! in `fightstats_lib`.

pub mod classify;
pub mod dom;
pub mod extract;
pub mod identity;
pub mod types;

pub use self::classify::{PageKind, UrlFilter};
pub use self::extract::{extract_document, extract_page, PageRecord};
pub use self::types::FighterRecord;
