use axum::extract::ws::Message;
use flare_core::ClientId;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// Write half of one live connection.
///
/// The receive side is drained by the connection's send pump; once that
/// pump exits, sends fail and the owner is treated as disconnected.
pub type ClientHandle = mpsc::UnboundedSender<Message>;

/// Authoritative map from client id to its live handle.
///
/// Every operation is serialized through the one lock, so each is
/// atomic with respect to every other. The lock is never held across a
/// send: fan-out iteration goes through `snapshot`.
#[derive(Default)]
pub struct Registry {
    clients: Mutex<HashMap<ClientId, ClientHandle>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ClientId, ClientHandle>> {
        self.clients.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace the entry for `id`.
    ///
    /// Returns the entry count observed in the same critical section as
    /// the insert; the join protocol branches on it.
    pub fn add(&self, id: ClientId, handle: ClientHandle) -> usize {
        let mut clients = self.lock();
        clients.insert(id, handle);
        clients.len()
    }

    /// Delete the entry for `id`. Removing an absent id is a no-op.
    pub fn remove(&self, id: &ClientId) -> Option<ClientHandle> {
        self.lock().remove(id)
    }

    pub fn lookup(&self, id: &ClientId) -> Option<ClientHandle> {
        self.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Point-in-time copy, safe to iterate without holding the lock.
    /// Enumeration order is unspecified.
    pub fn snapshot(&self) -> Vec<(ClientId, ClientHandle)> {
        self.lock()
            .iter()
            .map(|(id, handle)| (id.clone(), handle.clone()))
            .collect()
    }
}
