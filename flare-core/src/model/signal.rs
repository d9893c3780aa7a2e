use crate::model::client::ClientId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol meaning of an envelope.
///
/// The named variants are the tags the relay itself produces; anything
/// else a client sends (offers, answers, candidate batches) is carried
/// through `Other` untouched.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    ClientId,
    CreatePc,
    CreateOffer,
    ClientDisconnect,
    #[serde(untagged)]
    Other(String),
}

/// The sole message type on the wire.
///
/// Only `from` and `type` are always present. Absent optionals are
/// omitted from the serialized form, never emitted as null.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SignalEnvelope {
    pub from: ClientId,
    #[serde(rename = "type")]
    pub kind: SignalKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(
        rename = "iceCandidates",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ice_candidates: Option<Vec<Value>>,
}

impl SignalEnvelope {
    pub fn new(from: ClientId, kind: SignalKind) -> Self {
        Self {
            from,
            kind,
            to: None,
            data: None,
            ice_candidates: None,
        }
    }

    pub fn with_to(mut self, to: ClientId) -> Self {
        self.to = Some(to);
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
