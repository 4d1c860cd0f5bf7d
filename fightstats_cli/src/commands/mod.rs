pub mod crawl;
pub mod extract;
