use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const TIMEOUT: Duration = Duration::from_secs(30);

pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// GET a page and return its body. Non-success statuses are errors.
pub async fn get_html(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("GET {} returned {}", url, status);
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read body of {}", url))
}
