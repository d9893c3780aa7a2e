use crate::signaling::registry::{ClientHandle, Registry};
use axum::extract::ws::Message;
use flare_core::{ClientId, SignalEnvelope, SignalKind, codec};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

struct HubInner {
    registry: Registry,
}

/// The signaling hub: join/leave lifecycle plus envelope routing.
///
/// Cheap to clone; every connection task holds one.
#[derive(Clone)]
pub struct SignalingHub {
    inner: Arc<HubInner>,
}

impl SignalingHub {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HubInner {
                registry: Registry::new(),
            }),
        }
    }

    pub fn client_count(&self) -> usize {
        self.inner.registry.len()
    }

    /// Admit a new connection: mint an identity, insert the handle,
    /// tell the client who it is, and when other peers are already
    /// present bootstrap pairwise negotiation with each of them.
    ///
    /// Returns the minted id; the caller owns the receive loop and must
    /// call `disconnect` with it on every exit path.
    pub fn register(&self, handle: ClientHandle) -> ClientId {
        let id = ClientId::new();
        let count = self.inner.registry.add(id.clone(), handle.clone());
        info!(client = %id, clients = count, "client connected");

        let identity = SignalEnvelope::new(id.clone(), SignalKind::ClientId)
            .with_data(Value::String(id.to_string()));
        if !self.deliver(&handle, &identity) {
            self.disconnect(&id);
            return id;
        }

        if count > 1 {
            self.announce_join(&id, &handle);
        }

        id
    }

    /// Full-mesh bootstrap: each existing peer is told once to expect a
    /// connection from the newcomer; the newcomer is told, once per
    /// existing peer, to prepare the connection and originate the offer.
    fn announce_join(&self, id: &ClientId, handle: &ClientHandle) {
        let mut failed = Vec::new();

        for (peer_id, peer_handle) in self.inner.registry.snapshot() {
            if peer_id == *id {
                continue;
            }

            let to_peer =
                SignalEnvelope::new(peer_id.clone(), SignalKind::CreatePc).with_to(id.clone());
            if !self.deliver(&peer_handle, &to_peer) {
                failed.push(peer_id.clone());
            }

            let prepare =
                SignalEnvelope::new(id.clone(), SignalKind::CreatePc).with_to(peer_id.clone());
            let offer =
                SignalEnvelope::new(id.clone(), SignalKind::CreateOffer).with_to(peer_id.clone());
            if !self.deliver(handle, &prepare) || !self.deliver(handle, &offer) {
                failed.push(id.clone());
            }
        }

        for peer_id in failed {
            self.disconnect(&peer_id);
        }
    }

    /// Route a client envelope to its addressee.
    ///
    /// Unroutable envelopes are dropped with a log line; the sender gets
    /// no error back. A failed delivery disconnects the addressee, not
    /// the sender.
    pub fn relay(&self, envelope: SignalEnvelope) {
        let Some(to) = envelope.to.clone() else {
            warn!(from = %envelope.from, "dropping envelope without recipient");
            return;
        };
        let Some(handle) = self.inner.registry.lookup(&to) else {
            warn!(from = %envelope.from, to = %to, "dropping envelope for unknown recipient");
            return;
        };

        debug!(from = %envelope.from, to = %to, kind = ?envelope.kind, "relaying envelope");
        if !self.deliver(&handle, &envelope) {
            self.disconnect(&to);
        }
    }

    /// Drop a client. Removing an id that is not registered is a no-op;
    /// a present one is removed and every remaining client is notified.
    ///
    /// The notification fans out over a frozen snapshot; recipients
    /// whose handle is dead are collected and disconnected afterwards,
    /// never mid-iteration.
    pub fn disconnect(&self, id: &ClientId) {
        if self.inner.registry.remove(id).is_none() {
            return;
        }
        info!(client = %id, clients = self.inner.registry.len(), "client disconnected");

        let notice = SignalEnvelope::new(id.clone(), SignalKind::ClientDisconnect);
        let mut failed = Vec::new();
        for (peer_id, peer_handle) in self.inner.registry.snapshot() {
            if !self.deliver(&peer_handle, &notice) {
                failed.push(peer_id);
            }
        }

        for peer_id in failed {
            self.disconnect(&peer_id);
        }
    }

    /// Encode and hand an envelope to one handle. Returns false when the
    /// handle is dead. An encode failure cannot tear a connection down;
    /// it is logged and the envelope dropped.
    fn deliver(&self, handle: &ClientHandle, envelope: &SignalEnvelope) -> bool {
        let payload = match codec::encode(envelope) {
            Ok(payload) => payload,
            Err(err) => {
                error!(error = %err, "failed to encode envelope");
                return true;
            }
        };
        handle.send(Message::Text(payload.into())).is_ok()
    }
}

impl Default for SignalingHub {
    fn default() -> Self {
        Self::new()
    }
}
