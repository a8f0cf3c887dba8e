// Core address and distance exports
pub mod distance;
pub mod normalizer;
pub mod validator;

pub use distance::haversine;
pub use normalizer::clean_address;
pub use validator::{is_valid_address, AddressPolicy, DEFAULT_MIN_LENGTH};
