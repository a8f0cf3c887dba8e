use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiSettings;
use crate::models::{DistanceRequest, DistanceResponse, ErrorResponse, HistoryRecord, HistoryResponse};

/// Message used when the backend rejects a distance request without a usable detail
pub const DISTANCE_FALLBACK_MESSAGE: &str = "Failed to calculate distance";

/// Errors that can occur when talking to the distance backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// `/distance` answered with a non-2xx status
    #[error("{0}")]
    Rejected(String),

    #[error("Failed to fetch history")]
    HistoryUnavailable,
}

/// HTTP client for the geocoding/distance backend and its history store
///
/// Each call issues exactly one request. Retries and caching are left to
/// whoever wraps this client; the only timeout is the transport's own.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        Ok(Self::with_client(base_url, Client::builder().build()?))
    }

    /// Create a client from API settings, applying the configured transport timeout
    pub fn from_settings(settings: &ApiSettings) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::with_client(settings.base_url.clone(), builder.build()?))
    }

    /// Reuse an existing reqwest client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend to geocode both addresses and measure the distance
    pub async fn request_distance(
        &self,
        request: &DistanceRequest,
    ) -> Result<DistanceResponse, BackendError> {
        let url = format!("{}/distance", self.base_url);

        tracing::debug!("Requesting distance from: {}", url);

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|err| err.message().map(str::to_string))
                .unwrap_or_else(|| DISTANCE_FALLBACK_MESSAGE.to_string());
            tracing::warn!("Distance request rejected: {} - {}", status, message);
            return Err(BackendError::Rejected(message));
        }

        let distance: DistanceResponse = response.json().await?;

        tracing::debug!(
            "Distance resolved: {:.3} km / {:.3} mi",
            distance.distance.kilometers,
            distance.distance.miles
        );

        Ok(distance)
    }

    /// Fetch every stored query, in whatever order the store returns them
    pub async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, BackendError> {
        let url = format!("{}/history", self.base_url);

        tracing::debug!("Fetching history from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::warn!("History request failed: {}", response.status());
            return Err(BackendError::HistoryUnavailable);
        }

        let history: HistoryResponse = response.json().await?;
        let records = history.into_records();

        tracing::debug!("Fetched {} history records", records.len());

        Ok(records)
    }
}
