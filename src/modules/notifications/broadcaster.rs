//! In-memory fan-out of notification events to connected SSE clients.
//!
//! The broadcaster owns a registry of per-connection channels. It is
//! created once, stored in [`crate::state::AppState`], and handed to
//! handlers through state rather than living in a global. Delivery is
//! best-effort: there is no queueing, no retry, and no replay, so a
//! client that is disconnected at publish time misses that event.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::{Arc, RwLock};
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

type Registry = Arc<RwLock<HashMap<Uuid, mpsc::UnboundedSender<String>>>>;

/// Registry of open notification connections.
///
/// Cloning is cheap and shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct Broadcaster {
    connections: Registry,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection and return its subscription handle.
    ///
    /// The subscription doubles as the deregistration handle: dropping
    /// it (client disconnect, stream teardown) removes the registry
    /// entry, so the registry never accumulates stale connections.
    pub fn register(&self) -> Subscription {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();

        self.write_lock().insert(id, tx);
        debug!(connection_id = %id, "Notification stream registered");

        Subscription {
            id,
            connections: Arc::clone(&self.connections),
            receiver: rx,
        }
    }

    /// Serialize `payload` once and push it to every open connection.
    ///
    /// The registry is snapshotted under the read lock before any send,
    /// so concurrent register/deregister calls never race the
    /// iteration. A failed send means the receiving side is gone; the
    /// entry is pruned and the remaining deliveries proceed. Returns
    /// the number of connections the event was delivered to.
    pub fn publish<T: Serialize>(&self, payload: &T) -> Result<usize, serde_json::Error> {
        let message = serde_json::to_string(payload)?;

        let snapshot: Vec<(Uuid, mpsc::UnboundedSender<String>)> = self
            .read_lock()
            .iter()
            .map(|(id, tx)| (*id, tx.clone()))
            .collect();

        let mut delivered = 0;
        let mut stale = Vec::new();
        for (id, tx) in snapshot {
            if tx.send(message.clone()).is_ok() {
                delivered += 1;
            } else {
                warn!(connection_id = %id, "Dropping closed notification connection");
                stale.push(id);
            }
        }

        if !stale.is_empty() {
            let mut connections = self.write_lock();
            for id in stale {
                connections.remove(&id);
            }
        }

        Ok(delivered)
    }

    /// Number of currently registered connections.
    pub fn connection_count(&self) -> usize {
        self.read_lock().len()
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, mpsc::UnboundedSender<String>>> {
        self.connections.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, mpsc::UnboundedSender<String>>> {
        self.connections.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// A single client's registration in the broadcaster.
///
/// Yields the serialized payloads published while it is open. Dropping
/// the subscription deregisters the connection.
pub struct Subscription {
    id: Uuid,
    connections: Registry,
    receiver: mpsc::UnboundedReceiver<String>,
}

impl Subscription {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Receive the next published payload, for direct (non-stream) use.
    pub async fn recv(&mut self) -> Option<String> {
        self.receiver.recv().await
    }
}

impl Stream for Subscription {
    type Item = String;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut connections = self
            .connections
            .write()
            .unwrap_or_else(|e| e.into_inner());
        connections.remove(&self.id);
        debug!(connection_id = %self.id, "Notification stream deregistered");
    }
}
