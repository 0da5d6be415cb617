//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` stores. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use searchscout_core::services::AppCore;
use searchscout_core::{ContextMenuPort, StorageArea, TabOpener};

use crate::repositories::SqliteKeyValueStore;

/// Factory for creating store instances with `SQLite` backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a `SQLite` connection pool.
    ///
    /// # Arguments
    ///
    /// * `db_url` - `SQLite` connection URL (e.g., "sqlite:~/.local/share/searchscout/data/searchscout.db")
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Create a key-value store for one storage area.
    pub fn build_store(pool: SqlitePool, area: StorageArea) -> Arc<SqliteKeyValueStore> {
        Arc::new(SqliteKeyValueStore::new(pool, area))
    }

    /// Build a complete `AppCore` over the synced storage area.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use searchscout_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let core = CoreFactory::build_app_core(pool, menu, tabs);
    /// core.on_installed().await?;
    /// ```
    pub fn build_app_core(
        pool: SqlitePool,
        menu: Arc<dyn ContextMenuPort>,
        tabs: Arc<dyn TabOpener>,
    ) -> AppCore {
        let store = Self::build_store(pool, StorageArea::Sync);
        AppCore::new(store, menu, tabs)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with full schema already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a synced-area store using this test database.
    pub fn sync_store(&self) -> SqliteKeyValueStore {
        SqliteKeyValueStore::new(self.pool.clone(), StorageArea::Sync)
    }
}
