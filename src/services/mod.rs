// Service exports
pub mod backend;

pub use backend::{BackendClient, BackendError, DISTANCE_FALLBACK_MESSAGE};
