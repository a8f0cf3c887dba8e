//! FarFetchr - address validation, normalization and distance gateway
//!
//! This library decides whether free-form text looks like a mailing address,
//! rewrites it into the form sent to the geocoding backend, computes
//! great-circle distances, and talks to the backend for distance queries and
//! query history.

pub mod config;
pub mod core;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{clean_address, haversine, is_valid_address, AddressPolicy};
pub use gateway::{ensure_distinct, GatewayError, QueryGateway};
pub use models::{Coordinate, DistanceResponse, DistanceResult, HistoryRecord};
