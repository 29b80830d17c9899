use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::AppError;
use crate::riot::metrics::UpstreamMetrics;

pub struct RiotClient {
    http: reqwest::Client,
    /// Riot API Key
    key: String,
    metrics: Arc<UpstreamMetrics>,
}

impl fmt::Debug for RiotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiotClient")
            .field("key", &"<redacted>")
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl RiotClient {
    pub fn new(
        key: String,
        timeout: Duration,
        metrics: Arc<UpstreamMetrics>,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("rank-badges/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { http, key, metrics })
    }

    /// Shared GET logic: auth header, status mapping and JSON decoding.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        self.metrics.record_request();
        trace!(url, "🛰️ Riot API request");

        let res = self.fetch(url).await;
        if res.is_err() {
            self.metrics.record_failure();
        }
        res
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let res = self
            .http
            .get(url)
            .header("X-Riot-Token", &self.key)
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => {
                let message = res.text().await.unwrap_or_default();
                Err(AppError::RiotApi {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
