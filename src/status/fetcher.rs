//! HTTP fetcher for status sources.

use super::error::FetchError;
use super::normalize::normalize_body;
use super::StatusResult;
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Upper bound on a single status request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(8);

/// Anything that can turn a status URL into a [`StatusResult`].
///
/// Implementations must not fail: every error path resolves to
/// [`StatusResult::unreachable`].
#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn fetch_status(&self, url: &str) -> StatusResult;
}

/// Fetches status sources over HTTP.
///
/// One attempt per call, no caching and no retries. Retrying is the
/// scheduler's job.
#[derive(Clone)]
pub struct HttpStatusFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpStatusFetcher {
    /// Create a fetcher with the standard 8 second bound.
    pub fn new() -> Self {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    /// Create a fetcher with a custom bound (for testing).
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("statuswatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self::with_client(client, timeout)
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Perform the request and return the declared content type and body.
    async fn fetch_body(&self, url: &str) -> Result<(Option<String>, String), FetchError> {
        let request = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| self.classify_error(e))?;

            if !response.status().is_success() {
                return Err(FetchError::HttpError(response.status().as_u16()));
            }

            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            let body = response
                .text()
                .await
                .map_err(|e| FetchError::Body(e.to_string()))?;

            Ok((content_type, body))
        };

        // The whole exchange, body included, shares one deadline.
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout.as_millis())),
        }
    }

    fn classify_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout.as_millis())
        } else {
            FetchError::ConnectionFailed(e.to_string())
        }
    }
}

impl Default for HttpStatusFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusProbe for HttpStatusFetcher {
    async fn fetch_status(&self, url: &str) -> StatusResult {
        let start = Instant::now();
        let outcome = self.fetch_body(url).await;

        metrics::histogram!("statuswatch_fetch_duration_seconds")
            .record(start.elapsed().as_secs_f64());

        match outcome {
            Ok((content_type, body)) => {
                let result = normalize_body(content_type.as_deref(), &body);
                tracing::debug!(
                    url = url,
                    content_type = content_type.as_deref().unwrap_or(""),
                    level = %result.level,
                    "Fetched status source"
                );
                result
            }
            Err(error) => {
                tracing::warn!(url = url, error = %error, "Status source unreachable");
                StatusResult::unreachable()
            }
        }
    }
}
