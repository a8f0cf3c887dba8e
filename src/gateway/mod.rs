// Gateway exports
pub mod policy;
pub mod query;

pub use policy::ensure_distinct;
pub use query::{GatewayError, QueryGateway};
