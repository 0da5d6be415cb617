//! Persisted key-value store port.
//!
//! This port models the extension's preference storage: string keys mapped
//! to JSON values, plus a change feed. Implementations handle all storage
//! details internally.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{RwLock, broadcast};
use tracing::debug;

use super::RepositoryError;
use crate::events::{StorageArea, StoreChange};

/// Broadcast channel capacity for store change notifications.
pub const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Key-value storage bound to a single [`StorageArea`].
///
/// # Design Rules
///
/// - Values are opaque JSON; typed (de)serialization happens in services
/// - Every successful write publishes a [`StoreChange`] naming the key
/// - Last write wins; there is no compare-and-swap
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// The area this store writes to. Carried on every change notification.
    fn area(&self) -> StorageArea;

    /// Read a key. Returns `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<Value>, RepositoryError>;

    /// Write a key, replacing any previous value.
    async fn set(&self, key: &str, value: Value) -> Result<(), RepositoryError>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;

    /// Subscribe to change notifications from this store.
    fn subscribe(&self) -> broadcast::Receiver<StoreChange>;
}

/// In-process store for tests and ephemeral sessions.
///
/// Data lives only as long as the value; change notifications behave like
/// the persisted implementation.
pub struct MemoryKeyValueStore {
    area: StorageArea,
    entries: RwLock<HashMap<String, Value>>,
    sender: broadcast::Sender<StoreChange>,
}

impl MemoryKeyValueStore {
    pub fn new(area: StorageArea) -> Self {
        let (sender, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            area,
            entries: RwLock::new(HashMap::new()),
            sender,
        }
    }

    fn notify(&self, key: &str) {
        // No receivers is fine, nothing is listening yet
        if self.sender.receiver_count() > 0 {
            debug!(area = %self.area, key, "Broadcasting store change");
            let _ = self.sender.send(StoreChange::new(self.area, [key]));
        }
    }
}

impl Default for MemoryKeyValueStore {
    fn default() -> Self {
        Self::new(StorageArea::Sync)
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    fn area(&self) -> StorageArea {
        self.area
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, RepositoryError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), RepositoryError> {
        self.entries.write().await.insert(key.to_string(), value);
        self.notify(key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let removed = self.entries.write().await.remove(key);
        if removed.is_some() {
            self.notify(key);
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.sender.subscribe()
    }
}
