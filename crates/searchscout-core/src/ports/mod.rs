//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from the host:
//! persisted storage, the context menu widget and tab opening. They contain
//! no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Storage is key-value with change notifications, nothing more
//! - Menu and tab ports are intent-based, not widget-API mirrors

pub mod context_menu;
pub mod key_value_store;
pub mod tab_opener;

use thiserror::Error;

use crate::utils::validation::SiteValidationError;

pub use context_menu::{ContextMenuPort, InMemoryContextMenu, MenuError};
pub use key_value_store::{KeyValueStore, MemoryKeyValueStore};
pub use tab_opener::{TabError, TabOpener};

/// Domain-specific errors for storage operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx
/// errors) and provides a clean interface for services to handle failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, inline form
/// messages).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// User input failed validation. Never persisted.
    #[error(transparent)]
    Validation(#[from] SiteValidationError),

    /// Seeded sites can be disabled but not deleted.
    #[error("Default search site '{0}' cannot be deleted")]
    DefaultSiteProtected(String),

    /// The context menu widget rejected an operation.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// A tab could not be opened.
    #[error(transparent)]
    Tab(#[from] TabError),
}

impl CoreError {
    /// Whether the user can fix this by changing their input.
    pub const fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::DefaultSiteProtected(_))
    }
}
