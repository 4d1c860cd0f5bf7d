//! URL classification: which pages get visited and which extractor runs.

/// Extraction routine a page routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Fighter stats page: bio header plus striking/clinch/ground tables.
    FighterStats,
    /// Fight history page: the chronological bout table.
    FightHistory,
}

/// Default allow-list: fighter and fight routes on the production site.
pub const DEFAULT_ALLOW: [&str; 2] = ["espn.com/mma/fight", "espn.com/mma/fighter/"];

/// Default deny-list: routes that share the fighter path prefix but carry
/// no extractable tables.
pub const DEFAULT_DENY: [&str; 4] = ["news", "bio", "watch", "schedule"];

/// Substring allow/deny filter over candidate URLs.
///
/// A URL is visitable when it contains at least one allow pattern and none
/// of the deny patterns. The lists are replaceable so tests and mirrors
/// can point the crawler elsewhere.
#[derive(Debug, Clone)]
pub struct UrlFilter {
    allow: Vec<String>,
    deny: Vec<String>,
}

impl Default for UrlFilter {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALLOW.iter().map(|s| s.to_string()).collect(),
            DEFAULT_DENY.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl UrlFilter {
    pub fn new(allow: Vec<String>, deny: Vec<String>) -> Self {
        Self { allow, deny }
    }

    /// Replaces the allow-list.
    pub fn with_allow(mut self, allow: Vec<String>) -> Self {
        self.allow = allow;
        self
    }

    /// Replaces the deny-list.
    pub fn with_deny(mut self, deny: Vec<String>) -> Self {
        self.deny = deny;
        self
    }

    /// Whether the crawler should fetch (or extract from) this URL at all.
    pub fn should_visit(&self, url: &str) -> bool {
        self.allow.iter().any(|pattern| url.contains(pattern.as_str()))
            && !self.deny.iter().any(|pattern| url.contains(pattern.as_str()))
    }

    /// Routes a visitable URL to its extractor; `None` means the page
    /// contributes nothing.
    pub fn classify(&self, url: &str) -> Option<PageKind> {
        if !self.should_visit(url) {
            return None;
        }
        if url.contains("stats") {
            Some(PageKind::FighterStats)
        } else if url.contains("history") {
            Some(PageKind::FightHistory)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_accepts_fighter_routes() {
        let filter = UrlFilter::default();
        assert!(filter.should_visit("https://www.espn.com/mma/fighter/_/id/1/jon-jones"));
        assert!(filter.should_visit("https://www.espn.com/mma/fightcenter"));
        assert!(!filter.should_visit("https://www.espn.com/nba/player/_/id/1"));
    }

    #[test]
    fn deny_list_overrides_allow_list() {
        let filter = UrlFilter::default();
        assert!(!filter.should_visit("https://www.espn.com/mma/fighter/schedule/_/id/1/jon-jones"));
        assert!(!filter.should_visit("https://www.espn.com/mma/fighter/news/_/id/1/jon-jones"));
        assert!(!filter.should_visit("https://www.espn.com/mma/fighter/bio/_/id/1/jon-jones"));
        assert!(!filter.should_visit("https://www.espn.com/mma/fighter/watch/_/id/1/jon-jones"));
    }

    #[test]
    fn classify_routes_stats_and_history() {
        let filter = UrlFilter::default();
        assert_eq!(
            filter.classify("https://www.espn.com/mma/fighter/stats/_/id/1/jon-jones"),
            Some(PageKind::FighterStats)
        );
        assert_eq!(
            filter.classify("https://www.espn.com/mma/fighter/history/_/id/1/jon-jones"),
            Some(PageKind::FightHistory)
        );
        assert_eq!(
            filter.classify("https://www.espn.com/mma/fighter/_/id/1/jon-jones"),
            None
        );
    }

    #[test]
    fn classify_never_routes_denied_urls() {
        let filter = UrlFilter::default();
        assert_eq!(
            filter.classify("https://www.espn.com/mma/fighter/schedule/_/id/1/jon-jones"),
            None
        );
    }

    #[test]
    fn custom_lists_replace_defaults() {
        let filter = UrlFilter::default().with_allow(vec!["/mma/fighter".to_string()]);
        assert!(filter.should_visit("http://127.0.0.1:8080/mma/fighter/stats/_/id/1/x"));
        assert!(!filter.should_visit("http://127.0.0.1:8080/mma/fighter/schedule/_/id/1/x"));
    }
}
