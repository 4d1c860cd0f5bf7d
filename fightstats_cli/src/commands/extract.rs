//! The `extract` subcommand: run the extractors over a saved page body.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use fightstats_lib::{extract_page, UrlFilter};

/// Arguments for the `extract` subcommand.
#[derive(Args)]
pub struct ExtractArgs {
    /// Saved HTML file to extract from
    pub file: PathBuf,

    /// URL the file was fetched from, used for classification
    #[arg(long)]
    pub url: String,
}

pub fn run(args: &ExtractArgs) -> Result<()> {
    let body = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    match extract_page(&args.url, &body, &UrlFilter::default()) {
        Some(page) => {
            eprintln!("identity: {}", page.key);
            println!("{}", serde_json::to_string_pretty(&page.record)?);
        }
        None => eprintln!("{} classifies to no extractor", args.url),
    }

    Ok(())
}
