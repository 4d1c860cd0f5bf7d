//! Concurrent site crawler: fetch, extract, aggregate, discover.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, LazyLock};

use scraper::{Html, Selector};
use tokio::task::JoinSet;
use url::Url;

use fightstats_extract::extract::extract_document;
use fightstats_extract::UrlFilter;

use crate::client::PageClient;
use crate::roster::{Roster, UpsertOutcome};

static HREF: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("href selector"));

/// Default entry point: a fighter history page, which links onward to the
/// rest of the fighter pages.
pub const DEFAULT_SEED: &str = "https://www.espn.com/mma/fighter/history/_/id/5134399/nick-klein";

/// Crawl parameters.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Entry URLs; seeds are fetched even when they classify to no
    /// extractor, so a hub page can bootstrap link discovery.
    pub seeds: Vec<String>,
    /// Allow/deny filter applied to discovered links and to extraction.
    pub filter: UrlFilter,
    /// In-flight page fetch limit.
    pub concurrency: usize,
    /// Bound on pages scheduled over the whole crawl, seeds included.
    /// Zero means unbounded.
    pub max_pages: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seeds: vec![DEFAULT_SEED.to_string()],
            filter: UrlFilter::default(),
            concurrency: 8,
            max_pages: 500,
        }
    }
}

/// Counters reported once the crawl barrier clears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub fighters: usize,
}

struct VisitOutcome {
    fetched: bool,
    links: Vec<String>,
}

/// Crawls from the configured seeds until every scheduled page has been
/// visited, upserting extracted records into `roster`.
///
/// Page-visit tasks run concurrently with no completion-order guarantee;
/// the function returns only after all of them have finished, so the
/// roster is final when it does.
pub async fn crawl(
    config: &CrawlConfig,
    client: Arc<PageClient>,
    roster: Arc<Roster>,
) -> CrawlSummary {
    let mut seen: HashSet<String> = HashSet::new();
    let mut frontier: VecDeque<String> = VecDeque::new();
    let mut scheduled = 0usize;
    let mut summary = CrawlSummary::default();

    for seed in &config.seeds {
        if seen.insert(seed.clone()) && under_budget(config.max_pages, scheduled) {
            frontier.push_back(seed.clone());
            scheduled += 1;
        }
    }

    let mut workers: JoinSet<VisitOutcome> = JoinSet::new();
    let concurrency = config.concurrency.max(1);

    loop {
        while workers.len() < concurrency {
            let Some(url) = frontier.pop_front() else { break };
            let client = Arc::clone(&client);
            let roster = Arc::clone(&roster);
            let filter = config.filter.clone();
            workers.spawn(async move { visit(url, client, roster, filter).await });
        }

        let Some(joined) = workers.join_next().await else { break };
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!("page task failed: {err}");
                summary.pages_failed += 1;
                continue;
            }
        };
        if outcome.fetched {
            summary.pages_fetched += 1;
        } else {
            summary.pages_failed += 1;
        }
        for link in outcome.links {
            if !under_budget(config.max_pages, scheduled) {
                break;
            }
            if config.filter.should_visit(&link) && seen.insert(link.clone()) {
                frontier.push_back(link);
                scheduled += 1;
            }
        }
    }

    summary.fighters = roster.len();
    summary
}

fn under_budget(max_pages: usize, scheduled: usize) -> bool {
    max_pages == 0 || scheduled < max_pages
}

async fn visit(
    url: String,
    client: Arc<PageClient>,
    roster: Arc<Roster>,
    filter: UrlFilter,
) -> VisitOutcome {
    let body = match client.fetch(&url).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(%url, "fetch failed: {err}");
            return VisitOutcome {
                fetched: false,
                links: Vec::new(),
            };
        }
    };

    let links = process_page(&url, &body, &roster, &filter);
    VisitOutcome {
        fetched: true,
        links,
    }
}

/// Parses the body once, upserts whatever the page extracts, and harvests
/// its outgoing links. Synchronous so the non-`Send` document never lives
/// across an await point.
fn process_page(url: &str, body: &str, roster: &Roster, filter: &UrlFilter) -> Vec<String> {
    let doc = Html::parse_document(body);

    if let Some(page) = extract_document(url, &doc, filter) {
        match roster.upsert(&page.key, page.record) {
            UpsertOutcome::Added => tracing::info!(fighter = %page.key, "fighter added"),
            UpsertOutcome::Updated => tracing::info!(fighter = %page.key, "fighter updated"),
        }
    }

    harvest_links(&doc, url)
}

fn harvest_links(doc: &Html, base: &str) -> Vec<String> {
    let Ok(base) = Url::parse(base) else {
        return Vec::new();
    };
    doc.select(&HREF)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .map(|mut resolved| {
            resolved.set_fragment(None);
            resolved.to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harvest_links_resolves_relative_hrefs() {
        let doc = Html::parse_document(
            r##"<a href="/mma/fighter/stats/_/id/1/x">stats</a>
               <a href="https://other.example/page">offsite</a>
               <a href="#section">anchor</a>"##,
        );
        let links = harvest_links(&doc, "https://www.espn.com/mma/fighter/_/id/1/x");
        assert!(links.contains(&"https://www.espn.com/mma/fighter/stats/_/id/1/x".to_string()));
        assert!(links.contains(&"https://other.example/page".to_string()));
        // Fragment-only links resolve back to the page itself, fragment
        // stripped, and get deduplicated by the seen-set later.
        assert!(links.contains(&"https://www.espn.com/mma/fighter/_/id/1/x".to_string()));
    }

    #[test]
    fn page_budget_counts_scheduled_pages() {
        assert!(under_budget(0, 10_000));
        assert!(under_budget(3, 2));
        assert!(!under_budget(3, 3));
    }
}
