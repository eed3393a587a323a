//! HTTP fetcher for target pages

use crate::error::ExtractError;
use crate::DEFAULT_USER_AGENT;
use std::time::Duration;
use tracing::{debug, warn};

/// Total request timeout (connect through body)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches raw page markup with a browser-like identity
///
/// Holds one `reqwest::Client` whose connection pool is shared across
/// calls; no per-request state. Exactly one attempt per invocation, no
/// retries.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a fetcher with the default browser user-agent
    pub fn new() -> Result<Self, ExtractError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Create a fetcher with a custom user-agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                ExtractError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self { client })
    }

    /// Fetch the raw markup body of `url`
    ///
    /// Any transport failure (DNS, TLS, connection refused, timeout) or a
    /// non-2xx status becomes [`ExtractError::Network`]; nothing is raised
    /// past this boundary.
    pub async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        validate_url(url)?;

        debug!(url, "fetching page");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ExtractError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "non-success status");
            return Err(ExtractError::Network {
                cause: format!("server returned status {}", status),
            });
        }

        // A drop or timeout mid-body is still a transport failure
        response.text().await.map_err(ExtractError::from_reqwest)
    }
}

/// Validate URL shape before touching the network
fn validate_url(url: &str) -> Result<(), ExtractError> {
    if url.is_empty() {
        return Err(ExtractError::Validation("URL is required".to_string()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ExtractError::Validation(
            "Invalid URL: must start with http:// or https://".to_string(),
        ));
    }
    url::Url::parse(url)
        .map(|_| ())
        .map_err(|e| ExtractError::Validation(format!("Invalid URL: {}", e)))
}
