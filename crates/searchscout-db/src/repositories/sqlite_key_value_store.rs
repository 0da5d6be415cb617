//! `SQLite` implementation of the `KeyValueStore` trait.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Row, SqlitePool};
use tokio::sync::broadcast;
use tracing::debug;

use searchscout_core::ports::key_value_store::CHANGE_CHANNEL_CAPACITY;
use searchscout_core::{KeyValueStore, RepositoryError, StorageArea, StoreChange};

/// `SQLite` implementation of the `KeyValueStore` trait.
///
/// Values are stored as JSON text in the `storage_kv` table, keyed by
/// storage area and key. Each instance is bound to one area and broadcasts
/// a [`StoreChange`] after every successful write.
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
    area: StorageArea,
    sender: broadcast::Sender<StoreChange>,
}

impl SqliteKeyValueStore {
    /// Create a new store for `area`.
    ///
    /// The schema must already exist (see [`crate::setup_database`]).
    pub fn new(pool: SqlitePool, area: StorageArea) -> Self {
        let (sender, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { pool, area, sender }
    }

    fn notify(&self, key: &str) {
        // Only log if there are receivers
        if self.sender.receiver_count() > 0 {
            debug!(area = %self.area, key, "Broadcasting store change");
            let _ = self.sender.send(StoreChange::new(self.area, [key]));
        }
    }
}

fn storage_err(e: &sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    fn area(&self) -> StorageArea {
        self.area
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM storage_kv WHERE area = ? AND key = ?")
            .bind(self.area.as_str())
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_err(&e))?;

        match row {
            Some(r) => {
                let json: String = r.get("value");
                Ok(Some(serde_json::from_str(&json)?))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(&value)?;
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query(
            "INSERT OR REPLACE INTO storage_kv (area, key, value, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(self.area.as_str())
        .bind(key)
        .bind(&json)
        .bind(&updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_err(&e))?;

        self.notify(key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM storage_kv WHERE area = ? AND key = ?")
            .bind(self.area.as_str())
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_err(&e))?;

        if result.rows_affected() > 0 {
            self.notify(key);
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.sender.subscribe()
    }
}
