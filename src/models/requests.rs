use serde::{Deserialize, Serialize};

/// Body of `POST /distance`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub source: String,
    pub destination: String,
}

impl DistanceRequest {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}
