use anyhow::Result;
use std::time::Duration;

const USER_AGENT: &str = concat!("encore-site/", env!("CARGO_PKG_VERSION"));

/// Shared client for the media APIs. Timeouts live here; the sources never
/// retry on their own.
pub fn create_client(timeout_secs: u64) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs.min(5)))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}
