//! Async HTTP fetching wrapping reqwest.
//!
//! Not a browser, just HTTP requests: redirects, timeouts, and retries with
//! exponential backoff. Non-2xx statuses count as failed attempts.

use std::time::Duration;

use crate::error::{Error, Result};

/// HTTP client for fetching the leaderboard page.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
}

impl FetchClient {
    /// Create a new client with a standard Chrome user-agent.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Fetch `url` and return the response body.
    ///
    /// Retries after each failed attempt up to `retries` times, sleeping
    /// `delay * 2^attempt` between attempts. HTTP errors and transport
    /// errors retry the same way.
    pub async fn fetch_html(&self, url: &str, retries: u32, delay: Duration) -> Result<String> {
        let mut attempt = 0u32;
        loop {
            match self.try_fetch(url).await {
                Ok(body) => {
                    tracing::info!("fetched {url} ({} bytes)", body.len());
                    return Ok(body);
                }
                Err(err) if attempt < retries => {
                    let backoff = delay * 2u32.saturating_pow(attempt.min(31));
                    attempt += 1;
                    tracing::warn!(
                        "attempt {attempt} failed fetching {url}: {err}; retrying in {backoff:?}"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(err) => {
                    tracing::error!(
                        "failed to fetch {url} after {} attempts: {err}",
                        retries + 1
                    );
                    return Err(Error::Fetch(format!(
                        "{url} after {} attempts: {err}",
                        retries + 1
                    )));
                }
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> std::result::Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.text().await
    }
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_does_not_panic() {
        let client = FetchClient::new(Duration::from_secs(10));
        let _ = client;
    }

    #[test]
    fn backoff_doubles_per_attempt() {
        let delay = Duration::from_secs(5);
        assert_eq!(delay * 2u32.pow(0), Duration::from_secs(5));
        assert_eq!(delay * 2u32.pow(1), Duration::from_secs(10));
        assert_eq!(delay * 2u32.pow(2), Duration::from_secs(20));
    }
}
