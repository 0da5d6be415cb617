//! Context menu widget port.
//!
//! The host owns the actual widget. This port exposes the two mutations the
//! synchronizer needs: clear everything, then create entries one at a time.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::MenuItemSpec;

/// Errors reported by the menu widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// An entry with this id already exists.
    #[error("Menu item '{0}' already exists")]
    DuplicateId(String),

    /// The requested parent entry does not exist.
    #[error("Parent menu item '{0}' does not exist")]
    UnknownParent(String),

    /// Any other widget failure.
    #[error("Menu widget error: {0}")]
    Widget(String),
}

/// Native context menu widget.
#[async_trait]
pub trait ContextMenuPort: Send + Sync {
    /// Remove every entry. Resolves once removal has fully completed.
    async fn remove_all(&self) -> Result<(), MenuError>;

    /// Create a single entry. Parents must be created before children.
    async fn create(&self, item: &MenuItemSpec) -> Result<(), MenuError>;
}

/// Menu widget that keeps entries in memory.
///
/// Enforces the same id and parent rules as a real widget, which makes it
/// useful for tests and for rendering the menu in a terminal.
#[derive(Debug, Default)]
pub struct InMemoryContextMenu {
    items: Mutex<Vec<MenuItemSpec>>,
}

impl InMemoryContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current entries, in creation order.
    pub async fn items(&self) -> Vec<MenuItemSpec> {
        self.items.lock().await.clone()
    }

    /// Entries without a parent.
    pub async fn top_level(&self) -> Vec<MenuItemSpec> {
        self.items
            .lock()
            .await
            .iter()
            .filter(|item| item.parent_id.is_none())
            .cloned()
            .collect()
    }

    /// Children of `parent_id`, in creation order.
    pub async fn children_of(&self, parent_id: &str) -> Vec<MenuItemSpec> {
        self.items
            .lock()
            .await
            .iter()
            .filter(|item| item.parent_id.as_deref() == Some(parent_id))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ContextMenuPort for InMemoryContextMenu {
    async fn remove_all(&self) -> Result<(), MenuError> {
        self.items.lock().await.clear();
        Ok(())
    }

    async fn create(&self, item: &MenuItemSpec) -> Result<(), MenuError> {
        let mut items = self.items.lock().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(MenuError::DuplicateId(item.id.clone()));
        }
        if let Some(parent) = item.parent_id.as_deref() {
            if !items.iter().any(|existing| existing.id == parent) {
                return Err(MenuError::UnknownParent(parent.to_string()));
            }
        }
        items.push(item.clone());
        Ok(())
    }
}
