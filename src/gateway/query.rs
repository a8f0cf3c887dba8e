use thiserror::Error;

use crate::config::Settings;
use crate::core::{clean_address, AddressPolicy};
use crate::models::{AddressSide, DistanceRequest, DistanceResponse, HistoryRecord};
use crate::services::{BackendClient, BackendError};

/// Errors surfaced to callers of the gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Please enter a valid {0} address.")]
    InvalidAddress(AddressSide),

    #[error("Source and destination addresses cannot be the same.")]
    IdenticalAddresses,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl GatewayError {
    /// True when the failure was detected before any network I/O
    pub fn is_local(&self) -> bool {
        !matches!(self, GatewayError::Backend(_))
    }
}

/// Orchestrates validate -> normalize -> backend for distance queries and
/// exposes the backend's query history.
///
/// Holds no mutable state; clones share the underlying connection pool and
/// can be used concurrently.
#[derive(Debug, Clone)]
pub struct QueryGateway {
    backend: BackendClient,
    policy: AddressPolicy,
}

impl QueryGateway {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            policy: AddressPolicy::default(),
        }
    }

    /// Build a gateway for the configured backend and address policy
    pub fn from_settings(settings: &Settings) -> Result<Self, GatewayError> {
        let backend = BackendClient::from_settings(&settings.api)?;
        Ok(Self::new(backend).with_policy(settings.validation.policy()))
    }

    pub fn with_policy(mut self, policy: AddressPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    pub fn policy(&self) -> AddressPolicy {
        self.policy
    }

    /// Validate and normalize both addresses, then ask the backend for the distance
    ///
    /// The source address is checked first; nothing is sent if either fails.
    pub async fn calculate_distance(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<DistanceResponse, GatewayError> {
        if !self.policy.is_valid(source) {
            tracing::info!("Rejected source address before lookup");
            return Err(GatewayError::InvalidAddress(AddressSide::Source));
        }
        if !self.policy.is_valid(destination) {
            tracing::info!("Rejected destination address before lookup");
            return Err(GatewayError::InvalidAddress(AddressSide::Destination));
        }

        let request = DistanceRequest::new(clean_address(source), clean_address(destination));

        tracing::debug!(
            source = %request.source,
            destination = %request.destination,
            "Submitting distance query"
        );

        Ok(self.backend.request_distance(&request).await?)
    }

    /// All prior queries known to the history store
    pub async fn get_history(&self) -> Result<Vec<HistoryRecord>, GatewayError> {
        Ok(self.backend.fetch_history().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GatewayError::InvalidAddress(AddressSide::Source).to_string(),
            "Please enter a valid source address."
        );
        assert_eq!(
            GatewayError::InvalidAddress(AddressSide::Destination).to_string(),
            "Please enter a valid destination address."
        );
        assert_eq!(
            GatewayError::Backend(BackendError::Rejected("Address not found".into())).to_string(),
            "Address not found"
        );
    }

    #[test]
    fn test_is_local() {
        assert!(GatewayError::InvalidAddress(AddressSide::Source).is_local());
        assert!(GatewayError::IdenticalAddresses.is_local());
        assert!(!GatewayError::Backend(BackendError::HistoryUnavailable).is_local());
    }

    #[test]
    fn test_from_settings_applies_validation_policy() {
        let mut settings = Settings::default();
        settings.api.base_url = "http://localhost:8000/".to_string();
        settings.validation.min_length = 25;

        let gateway = QueryGateway::from_settings(&settings).unwrap();
        assert_eq!(gateway.policy(), AddressPolicy::new(25));
        assert_eq!(gateway.backend().base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_invalid_source_fails_without_backend() {
        // Nothing listens here; reaching the network would yield a transport error instead
        let gateway = QueryGateway::new(BackendClient::new("http://127.0.0.1:9").unwrap());
        let err = gateway
            .calculate_distance("123", "1600 Amphitheatre Parkway, Mountain View, CA")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidAddress(AddressSide::Source)));
    }

    #[tokio::test]
    async fn test_invalid_destination_reported_separately() {
        let gateway = QueryGateway::new(BackendClient::new("http://127.0.0.1:9").unwrap());
        let err = gateway
            .calculate_distance("415 Mission St, San Francisco, CA", "nowhere")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidAddress(AddressSide::Destination)));
    }
}
