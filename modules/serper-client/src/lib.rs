pub mod error;
pub mod types;

pub use error::{Result, SerperError};
pub use types::{OrganicResult, SearchRequest, SearchResponse};

use std::time::Duration;

use tracing::{info, warn};

const BASE_URL: &str = "https://google.serper.dev/search";

/// Per-request timeout. Serper normally answers in well under a second;
/// anything past this is a stuck connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Total attempts per search, including the first.
const MAX_ATTEMPTS: u32 = 3;

pub struct SerperClient {
    client: reqwest::Client,
    api_key: String,
}

impl SerperClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Run one search and return the organic results. Transient failures
    /// (network errors, non-2xx responses) are retried with exponential
    /// backoff (1s, 2s) before the last error is surfaced.
    pub async fn search(&self, query: &str, num: usize) -> Result<Vec<OrganicResult>> {
        info!(query, num, "Serper search");

        let mut last_err = None;
        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                let backoff = Duration::from_secs(1 << (attempt - 1));
                warn!(
                    query,
                    attempt = attempt + 1,
                    backoff_secs = backoff.as_secs(),
                    "Serper request failed, retrying after backoff"
                );
                tokio::time::sleep(backoff).await;
            }

            match self.search_once(query, num).await {
                Ok(results) => {
                    info!(query, count = results.len(), "Serper search complete");
                    return Ok(results);
                }
                Err(e) => last_err = Some(e),
            }
        }

        Err(last_err.expect("at least one attempt was made"))
    }

    async fn search_once(&self, query: &str, num: usize) -> Result<Vec<OrganicResult>> {
        let resp = self
            .client
            .post(BASE_URL)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&SearchRequest { q: query, num })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SerperError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: SearchResponse = resp.json().await?;
        Ok(data.organic)
    }
}
