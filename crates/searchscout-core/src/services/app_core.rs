//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Hosts (the CLI, or a
//! browser runtime binding) construct an `AppCore` with concrete ports and
//! forward lifecycle events to it.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use super::{
    DispatchOutcome, EditorController, MenuSynchronizer, RebuildOutcome, SelectionDispatcher,
    SiteRepository,
};
use crate::domain::MenuClick;
use crate::ports::{ContextMenuPort, CoreError, KeyValueStore, TabOpener};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let core = AppCore::new(store, menu, tabs);
/// core.on_installed().await?;
/// let _listener = core.start();
///
/// core.editor().add("Docs", "https://docs.rs/releases/search?query=%s").await?;
/// ```
pub struct AppCore {
    repo: SiteRepository,
    menu_sync: Arc<MenuSynchronizer>,
    dispatcher: SelectionDispatcher,
    editor: EditorController,
}

impl AppCore {
    /// Create a new `AppCore` over the host's ports.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        menu: Arc<dyn ContextMenuPort>,
        tabs: Arc<dyn TabOpener>,
    ) -> Self {
        let repo = SiteRepository::new(store);
        Self {
            menu_sync: Arc::new(MenuSynchronizer::new(repo.clone(), menu)),
            dispatcher: SelectionDispatcher::new(repo.clone(), tabs),
            editor: EditorController::new(repo.clone()),
            repo,
        }
    }

    /// Access the site repository.
    pub const fn sites(&self) -> &SiteRepository {
        &self.repo
    }

    /// Access the menu synchronizer.
    pub const fn menu(&self) -> &Arc<MenuSynchronizer> {
        &self.menu_sync
    }

    /// Access the selection dispatcher.
    pub const fn dispatcher(&self) -> &SelectionDispatcher {
        &self.dispatcher
    }

    /// Access the editor controller.
    pub const fn editor(&self) -> &EditorController {
        &self.editor
    }

    /// Extension installed or updated: seed defaults, then build the menu.
    pub async fn on_installed(&self) -> Result<RebuildOutcome, CoreError> {
        let seeded = self.repo.initialize_if_empty().await?;
        info!(seeded, "Extension installed");
        self.menu_sync.request_rebuild().await
    }

    /// Browser started with the extension already installed.
    pub async fn on_startup(&self) -> Result<RebuildOutcome, CoreError> {
        self.menu_sync.request_rebuild().await
    }

    /// Forward a menu click to the dispatcher.
    pub async fn on_menu_clicked(&self, click: &MenuClick) -> Result<DispatchOutcome, CoreError> {
        self.dispatcher.handle_click(click).await
    }

    /// Start observing store changes. The listener runs until the store's
    /// change channel closes or the handle is aborted.
    pub fn start(&self) -> JoinHandle<()> {
        self.menu_sync.spawn_change_listener()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PARENT_MENU_ID;
    use crate::ports::tab_opener::MockTabOpener;
    use crate::ports::{InMemoryContextMenu, MemoryKeyValueStore};

    fn core_with(menu: Arc<InMemoryContextMenu>, tabs: MockTabOpener) -> AppCore {
        AppCore::new(
            Arc::new(MemoryKeyValueStore::default()),
            menu,
            Arc::new(tabs),
        )
    }

    #[tokio::test]
    async fn test_install_seeds_and_builds_menu() {
        let menu = Arc::new(InMemoryContextMenu::new());
        let core = core_with(menu.clone(), MockTabOpener::new());

        let outcome = core.on_installed().await.unwrap();

        assert_eq!(outcome, RebuildOutcome::Rebuilt { items: 8 });
        assert_eq!(core.sites().get_all().await.len(), 7);
        assert_eq!(menu.children_of(PARENT_MENU_ID).await.len(), 7);
    }

    #[tokio::test]
    async fn test_startup_on_empty_storage_builds_nothing() {
        let menu = Arc::new(InMemoryContextMenu::new());
        let core = core_with(menu.clone(), MockTabOpener::new());

        let outcome = core.on_startup().await.unwrap();

        assert_eq!(outcome, RebuildOutcome::Rebuilt { items: 0 });
        assert!(core.sites().get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_click_through_facade() {
        let mut tabs = MockTabOpener::new();
        tabs.expect_open_tab()
            .withf(|url| url == "https://duckduckgo.com/?q=tokio%20runtime")
            .times(1)
            .returning(|_| Ok(()));
        let core = core_with(Arc::new(InMemoryContextMenu::new()), tabs);
        core.on_installed().await.unwrap();

        let outcome = core
            .on_menu_clicked(&MenuClick::nested("default-duckduckgo", "tokio runtime"))
            .await
            .unwrap();
        assert!(matches!(outcome, DispatchOutcome::Opened { .. }));
    }
}
