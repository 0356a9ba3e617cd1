use std::collections::HashSet;

use anyhow::Result;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::fetch;

pub const HOST: &str = "https://www.reed.co.uk";
const LISTING_URL: &str = "https://www.reed.co.uk/jobs/software-engineer-jobs?pageno=";
const POSTING_LINK: &str = "a.job-result-card__block-link";

/// Fetch `pages` listing pages in order and return the deduplicated posting
/// URLs found on them. Order is not preserved across deduplication and
/// callers must not depend on it.
pub async fn collect_posting_urls(
    client: &Client,
    pages: usize,
    promoted: usize,
) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for page in 1..=pages {
        let page_url = format!("{}{}", LISTING_URL, page);
        let html = fetch::get_html(client, &page_url).await?;
        let links = page_posting_urls(&html, promoted);
        info!("Listing page {}: {} posting links", page, links.len());
        urls.extend(links);
    }
    Ok(dedupe(urls))
}

/// Posting URLs on one listing page, promoted prefix removed.
///
/// The first `promoted` slots on every page are sponsored postings that
/// repeat across the whole listing; they are dropped by position, not by
/// content. Fewer raw links than the drop count is layout drift and only
/// warns.
pub fn page_posting_urls(html: &str, promoted: usize) -> Vec<String> {
    let selector = Selector::parse(POSTING_LINK).unwrap();
    let document = Html::parse_document(html);

    let mut hrefs: Vec<String> = document
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .map(absolute_url)
        .collect();

    if hrefs.len() < promoted {
        warn!(
            "Expected at least {} promoted slots, found {} links; dropping all",
            promoted,
            hrefs.len()
        );
    }
    hrefs.drain(..promoted.min(hrefs.len()));
    hrefs
}

fn dedupe(urls: Vec<String>) -> Vec<String> {
    let unique: HashSet<String> = urls.into_iter().collect();
    unique.into_iter().collect()
}

/// Listing hrefs are host-relative paths; resolve against the fixed host.
fn absolute_url(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", HOST, href)
    }
}

// ── Tests ──
