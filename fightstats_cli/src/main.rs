mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fightstats")]
#[command(about = "Crawl fighter pages and aggregate their stats into JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the site and write the aggregated roster
    Crawl(commands::crawl::CrawlArgs),
    /// Run the extractors over a saved HTML page
    Extract(commands::extract::ExtractArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fightstats_lib=info".parse().unwrap())
                .add_directive("fightstats_extract=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Crawl(args) => commands::crawl::run(args).await?,
        Commands::Extract(args) => commands::extract::run(args)?,
    }

    Ok(())
}
