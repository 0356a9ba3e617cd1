mod db;
mod export;
mod fetch;
mod listing;
mod posting;
mod record;
mod text;
mod vocab;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::record::JobRecord;

#[derive(Parser)]
#[command(name = "reed_scraper", about = "Job-language scraper for reed.co.uk")]
struct Cli {
    /// Listing pages to walk (prompted interactively when omitted)
    #[arg(short = 'n', long)]
    pages: Option<usize>,
    /// Promoted slots dropped from the top of each listing page
    #[arg(long, default_value_t = 2)]
    promoted: usize,
    /// SQLite database path
    #[arg(long, default_value = "jobs.db")]
    db: PathBuf,
    /// CSV export path
    #[arg(long, default_value = "jobs.csv")]
    out: PathBuf,
    /// Max postings to process (default: all collected)
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let pages = match cli.pages {
        Some(n) if n > 0 => n,
        _ => prompt_page_count()?,
    };

    // Destructive reset: the table starts empty on every run.
    let conn = db::connect(&cli.db)?;
    db::init_schema(&conn)?;
    drop(conn);

    let client = fetch::client()?;
    let urls = listing::collect_posting_urls(&client, pages, cli.promoted).await?;
    if urls.is_empty() {
        anyhow::bail!("no posting links found across {} listing pages", pages);
    }
    let urls: Vec<String> = match cli.limit {
        Some(n) => urls.into_iter().take(n).collect(),
        None => urls,
    };

    println!("Scraping {} postings...", urls.len());
    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    // Postings are fetched and processed one at a time; a failure on one
    // posting is recorded and skipped, never aborting the batch.
    let mut records: Vec<JobRecord> = Vec::new();
    let mut failures: Vec<(String, String)> = Vec::new();
    for url in &urls {
        match scrape_posting(&client, url).await {
            Ok(posting) => {
                let record = JobRecord::build(&posting);
                db::insert_record(&cli.db, &record)?;
                records.push(record);
            }
            Err(e) => {
                warn!("Skipping {}: {:#}", url, e);
                failures.push((url.clone(), format!("{:#}", e)));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    export::write_csv(&records, &cli.out)?;

    println!("Number of job results: {}", records.len());
    if !failures.is_empty() {
        println!("{} postings skipped:", failures.len());
        for (url, reason) in &failures {
            println!("  {}: {}", url, reason);
        }
    }
    Ok(())
}

async fn scrape_posting(client: &reqwest::Client, url: &str) -> Result<posting::JobPosting> {
    let html = fetch::get_html(client, url).await?;
    Ok(posting::extract(&html, url)?)
}

/// Ask for a page count until a positive integer is supplied. Invalid input
/// re-prompts; only a closed stdin gives up.
fn prompt_page_count() -> Result<usize> {
    loop {
        print!("How many pages do you want to scrape? ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed before a page count was supplied");
        }
        match line.trim().parse::<usize>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => println!("Please enter a positive integer value..."),
        }
    }
}
