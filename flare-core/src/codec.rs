use crate::model::SignalEnvelope;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to serialize signal envelope: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("malformed signal envelope: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Serialize an envelope to its wire form.
pub fn encode(envelope: &SignalEnvelope) -> Result<String, CodecError> {
    serde_json::to_string(envelope).map_err(CodecError::Encode)
}

/// Parse an envelope from its wire form.
///
/// A decode failure is non-fatal: the owning receive loop logs it and
/// keeps reading, the connection stays up.
pub fn decode(raw: &str) -> Result<SignalEnvelope, CodecError> {
    serde_json::from_str(raw).map_err(CodecError::Decode)
}
