//! The `crawl` subcommand: run the crawler and write the JSON batch.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Args;

use fightstats_lib::output;
use fightstats_lib::{crawl, CrawlConfig, DelayRange, PageClient, Roster, UrlFilter};

/// Arguments for the `crawl` subcommand.
#[derive(Args)]
pub struct CrawlArgs {
    /// Entry URLs; defaults to the production fighter-history seed
    #[arg(value_name = "SEED")]
    pub seeds: Vec<String>,

    /// Output path for the aggregated JSON
    #[arg(long, default_value = "fighters.json")]
    pub out: PathBuf,

    /// Maximum number of pages to schedule, 0 for unbounded
    #[arg(long, default_value = "500")]
    pub max_pages: usize,

    /// Concurrent page fetches
    #[arg(long, default_value = "8")]
    pub concurrency: usize,

    /// Minimum delay between requests in milliseconds
    #[arg(long, default_value = "500")]
    pub min_delay_ms: u64,

    /// Maximum delay between requests in milliseconds
    #[arg(long, default_value = "4000")]
    pub max_delay_ms: u64,

    /// Replace the allow-list of URL substrings
    #[arg(long)]
    pub allow: Vec<String>,

    /// Replace the deny-list of URL substrings
    #[arg(long)]
    pub deny: Vec<String>,
}

pub async fn run(args: &CrawlArgs) -> Result<()> {
    let start = Instant::now();

    let mut filter = UrlFilter::default();
    if !args.allow.is_empty() {
        filter = filter.with_allow(args.allow.clone());
    }
    if !args.deny.is_empty() {
        filter = filter.with_deny(args.deny.clone());
    }

    let mut config = CrawlConfig {
        filter,
        concurrency: args.concurrency,
        max_pages: args.max_pages,
        ..CrawlConfig::default()
    };
    if !args.seeds.is_empty() {
        config.seeds = args.seeds.clone();
    }

    let client = Arc::new(PageClient::new(DelayRange {
        min_ms: args.min_delay_ms,
        max_ms: args.max_delay_ms,
    })?);
    let roster = Arc::new(Roster::new());

    eprintln!("Starting crawl from {} seed(s)", config.seeds.len());
    let summary = crawl(&config, client, Arc::clone(&roster)).await;

    let fighters = roster.records();
    output::write_json(&args.out, &fighters)?;

    eprintln!(
        "Crawl complete: {} pages fetched, {} failed, {} fighters written to {}",
        summary.pages_fetched,
        summary.pages_failed,
        fighters.len(),
        args.out.display()
    );
    eprintln!("Execution time: {:.1?}", start.elapsed());

    Ok(())
}
