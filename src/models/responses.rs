use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{deserialize_optional_timestamp, DistanceResult, HistoryRecord};

/// Successful `POST /distance` response
///
/// The backend echoes the addresses it geocoded and when it answered; those
/// fields are optional since only the distance itself is guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResponse {
    #[serde(flatten)]
    pub distance: DistanceResult,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// `GET /history` body: either a bare array or wrapped as `{"history": [...]}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HistoryResponse {
    Wrapped { history: Vec<HistoryRecord> },
    Bare(Vec<HistoryRecord>),
}

impl HistoryResponse {
    pub fn into_records(self) -> Vec<HistoryRecord> {
        match self {
            HistoryResponse::Wrapped { history } => history,
            HistoryResponse::Bare(records) => records,
        }
    }
}

/// Error body returned by the backend on a non-2xx response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// The `detail` message, if it is a non-empty string
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
    }
}
