use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::text::{detect_languages, tokenize};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("missing {0} element")]
    MissingField(&'static str),
}

/// One scraped posting, consumed once by the record builder.
#[derive(Debug)]
pub struct JobPosting {
    pub title: String,
    pub location: String,
    pub url: String,
    pub languages: HashSet<&'static str>,
}

/// Pull the structured fields out of a fetched posting page.
///
/// Any missing required element aborts extraction for this posting with a
/// typed error; there is no partial-success path within one page.
pub fn extract(html: &str, url: &str) -> Result<JobPosting, ExtractError> {
    let document = Html::parse_document(html);

    let title = select_text(&document, "h1").ok_or(ExtractError::MissingField("title"))?;
    let location = select_text(&document, r#"[itemprop="addressLocality"]"#)
        .ok_or(ExtractError::MissingField("location"))?;

    let description_sel = Selector::parse(r#"[itemprop="description"]"#).unwrap();
    let description = document
        .select(&description_sel)
        .next()
        .ok_or(ExtractError::MissingField("description"))?;

    // The full description body and each <li> are scanned separately, then
    // unioned; duplicates collapse only after the two passes are combined.
    let body_tokens = tokenize(&element_text(description));
    let mut matches = detect_languages(&body_tokens);

    let li_sel = Selector::parse("li").unwrap();
    for item in description.select(&li_sel) {
        let item_tokens = tokenize(&element_text(item));
        matches.extend(detect_languages(&item_tokens));
    }

    let languages: HashSet<&'static str> = matches.into_iter().collect();

    Ok(JobPosting {
        title,
        location,
        url: url.to_string(),
        languages,
    })
}

fn select_text(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).unwrap();
    document.select(&sel).next().map(clean_text)
}

/// Element text with nested nodes joined and whitespace collapsed.
fn clean_text(element: ElementRef) -> String {
    element_text(element)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

// ── Tests ──
