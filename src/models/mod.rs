// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AddressSide, Coordinate, DistanceResult, HistoryRecord, KM_TO_MILES};
pub use requests::DistanceRequest;
pub use responses::{DistanceResponse, ErrorResponse, HistoryResponse};
