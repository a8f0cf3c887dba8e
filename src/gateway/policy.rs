use crate::core::clean_address;
use crate::gateway::GatewayError;

/// Reject a query whose two addresses normalize to the same text
///
/// `QueryGateway` never calls this. Callers that want the check apply it
/// themselves before submitting, so the validator and normalizer stay
/// single-input.
pub fn ensure_distinct(source: &str, destination: &str) -> Result<(), GatewayError> {
    let source = clean_address(source);
    let destination = clean_address(destination);

    if source.to_lowercase() == destination.to_lowercase() {
        return Err(GatewayError::IdenticalAddresses);
    }
    Ok(())
}
