use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::Result;

const USER_AGENT: &str = "scrape-betting-bot/1.0 (mailto:noreply@example.com)";

/// Fetch a page body with a bounded timeout.
///
/// Transport errors, timeouts and non-success statuses all come back as
/// `Error::Fetch`. There is no retry.
pub async fn fetch_page(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;

    info!("Fetching {}", url);
    let start = Instant::now();
    let response = client.get(url).send().await?.error_for_status()?;
    debug!(status = %response.status(), "Response received");
    let body = response.text().await?;

    info!(
        "Fetched {} bytes in {}ms",
        body.len(),
        start.elapsed().as_millis()
    );
    Ok(body)
}
