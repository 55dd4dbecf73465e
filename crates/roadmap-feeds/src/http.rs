//! Upstream feed: fetches the live roadmap snapshot over HTTPS.

use crate::parse::decode_snapshot;
use roadmap_core::config::FeedConfig;
use roadmap_core::{FetchError, Record, RecordSource};
use std::time::Duration;

/// The public roadmap API. Every call to
/// [`fetch_records`](RecordSource::fetch_records) performs a fresh GET.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    url: String,
    client: reqwest::Client,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("roadmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Request {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { url, client })
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self, FetchError> {
        Self::new(&config.url, Duration::from_secs(config.timeout_secs))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request_error(&self, e: reqwest::Error) -> FetchError {
        FetchError::Request {
            url: self.url.clone(),
            reason: e.to_string(),
        }
    }
}

impl RecordSource for HttpFeed {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        tracing::debug!(url = %self.url, "fetching roadmap feed");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;
        let records = decode_snapshot(&body)?;
        tracing::debug!(records = records.len(), bytes = body.len(), "roadmap feed decoded");
        Ok(records)
    }
}
