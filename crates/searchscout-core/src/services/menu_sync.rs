//! Menu synchronizer - keeps the context menu in step with storage.
//!
//! The synchronizer is a two-state machine (`Idle` / `Rebuilding`). A
//! rebuild requested while another is in flight is dropped, not queued:
//! every state change produces its own notification, so the next real
//! change supersedes a dropped request.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::SiteRepository;
use crate::domain::{MenuTopology, plan_menu};
use crate::ports::{ContextMenuPort, CoreError};

/// Synchronizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Rebuilding,
}

/// Result of a rebuild request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// The menu was rebuilt with this many entries.
    Rebuilt { items: usize },
    /// Another rebuild was already running; this request was dropped.
    Skipped,
}

/// Scope guard for the `Rebuilding` state.
///
/// Returns the synchronizer to `Idle` on drop, including on error paths.
struct RebuildGuard<'a> {
    rebuilding: &'a AtomicBool,
}

impl<'a> RebuildGuard<'a> {
    fn try_acquire(rebuilding: &'a AtomicBool) -> Option<Self> {
        rebuilding
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { rebuilding })
    }
}

impl Drop for RebuildGuard<'_> {
    fn drop(&mut self) {
        self.rebuilding.store(false, Ordering::SeqCst);
    }
}

/// Reconciles the live context menu against repository state.
pub struct MenuSynchronizer {
    repo: SiteRepository,
    menu: Arc<dyn ContextMenuPort>,
    rebuilding: AtomicBool,
}

impl MenuSynchronizer {
    /// Create a new synchronizer in the `Idle` state.
    pub fn new(repo: SiteRepository, menu: Arc<dyn ContextMenuPort>) -> Self {
        Self {
            repo,
            menu,
            rebuilding: AtomicBool::new(false),
        }
    }

    /// Current state.
    pub fn state(&self) -> SyncState {
        if self.rebuilding.load(Ordering::SeqCst) {
            SyncState::Rebuilding
        } else {
            SyncState::Idle
        }
    }

    /// Rebuild the menu from the current repository state.
    ///
    /// Removal of the old entries completes before any new entry is
    /// created. Widget errors are returned; the state is back to `Idle`
    /// either way.
    pub async fn request_rebuild(&self) -> Result<RebuildOutcome, CoreError> {
        let Some(_guard) = RebuildGuard::try_acquire(&self.rebuilding) else {
            debug!("Menu rebuild already in flight, dropping request");
            return Ok(RebuildOutcome::Skipped);
        };

        self.menu.remove_all().await?;

        let settings = self.repo.get_settings().await;
        let sites = self.repo.get_enabled_sorted().await;
        let plan = plan_menu(&settings, &sites);

        for item in &plan {
            self.menu.create(item).await?;
        }

        info!(
            items = plan.len(),
            sites = sites.len(),
            topology = ?MenuTopology::from_settings(&settings),
            "Rebuilt context menu"
        );
        Ok(RebuildOutcome::Rebuilt { items: plan.len() })
    }

    /// Subscribe to store changes and rebuild on each relevant one.
    ///
    /// Runs until the store's change channel closes. Rebuild failures are
    /// logged and do not stop the listener.
    pub fn spawn_change_listener(self: &Arc<Self>) -> JoinHandle<()> {
        let mut changes = self.repo.subscribe();
        let this = Arc::clone(self);

        tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(change) if change.affects_menu() => {
                        debug!(area = %change.area, keys = ?change.keys, "Store change, rebuilding menu");
                        this.rebuild_logged().await;
                    }
                    Ok(change) => {
                        debug!(area = %change.area, keys = ?change.keys, "Ignoring store change");
                    }
                    Err(RecvError::Lagged(missed)) => {
                        warn!(missed, "Missed store changes, rebuilding menu");
                        this.rebuild_logged().await;
                    }
                    Err(RecvError::Closed) => {
                        debug!("Store change channel closed, stopping menu listener");
                        break;
                    }
                }
            }
        })
    }

    async fn rebuild_logged(&self) {
        if let Err(e) = self.request_rebuild().await {
            error!(error = %e, "Failed to rebuild context menu");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PARENT_MENU_ID;
    use crate::domain::{MenuItemSpec, NewSite, SiteUpdate, default_sites};
    use crate::ports::{InMemoryContextMenu, MemoryKeyValueStore, MenuError};
    use crate::settings::SettingsUpdate;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;

    fn setup() -> (SiteRepository, Arc<InMemoryContextMenu>, Arc<MenuSynchronizer>) {
        let repo = SiteRepository::new(Arc::new(MemoryKeyValueStore::default()));
        let menu = Arc::new(InMemoryContextMenu::new());
        let sync = Arc::new(MenuSynchronizer::new(repo.clone(), menu.clone()));
        (repo, menu, sync)
    }

    async fn enable_only(repo: &SiteRepository, count: usize) {
        let mut sites = default_sites();
        for site in sites.iter_mut().skip(count) {
            site.enabled = false;
        }
        repo.replace_all(&sites).await.unwrap();
    }

    #[tokio::test]
    async fn test_nested_menu_with_three_sites() {
        let (repo, menu, sync) = setup();
        enable_only(&repo, 3).await;

        let outcome = sync.request_rebuild().await.unwrap();

        assert_eq!(outcome, RebuildOutcome::Rebuilt { items: 4 });
        let top = menu.top_level().await;
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, PARENT_MENU_ID);
        let children: Vec<String> = menu
            .children_of(PARENT_MENU_ID)
            .await
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(children, vec!["Google", "DuckDuckGo", "Bing"]);
        assert_eq!(sync.state(), SyncState::Idle);
    }

    #[tokio::test]
    async fn test_flat_menu_with_two_sites() {
        let (repo, menu, sync) = setup();
        enable_only(&repo, 2).await;
        repo.save_settings(&SettingsUpdate {
            use_flat_menu: Some(true),
        })
        .await
        .unwrap();

        sync.request_rebuild().await.unwrap();

        let items = menu.items().await;
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.parent_id.is_none()));
        assert!(items.iter().all(|i| i.id != PARENT_MENU_ID));
    }

    #[tokio::test]
    async fn test_no_enabled_sites_creates_nothing() {
        let (repo, menu, sync) = setup();
        enable_only(&repo, 0).await;

        let outcome = sync.request_rebuild().await.unwrap();

        assert_eq!(outcome, RebuildOutcome::Rebuilt { items: 0 });
        assert!(menu.items().await.is_empty());
    }

    #[tokio::test]
    async fn test_rebuild_replaces_previous_entries() {
        let (repo, menu, sync) = setup();
        repo.initialize_if_empty().await.unwrap();
        sync.request_rebuild().await.unwrap();

        repo.update("default-google", &SiteUpdate::enabled(false))
            .await
            .unwrap();
        sync.request_rebuild().await.unwrap();

        let items = menu.items().await;
        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|i| i.id != "default-google"));
    }

    /// Menu whose `remove_all` blocks until released.
    struct GatedMenu {
        inner: InMemoryContextMenu,
        gate: Notify,
    }

    #[async_trait]
    impl ContextMenuPort for GatedMenu {
        async fn remove_all(&self) -> Result<(), MenuError> {
            self.gate.notified().await;
            self.inner.remove_all().await
        }

        async fn create(&self, item: &MenuItemSpec) -> Result<(), MenuError> {
            self.inner.create(item).await
        }
    }

    #[tokio::test]
    async fn test_overlapping_rebuild_is_dropped() {
        let repo = SiteRepository::new(Arc::new(MemoryKeyValueStore::default()));
        repo.initialize_if_empty().await.unwrap();
        let menu = Arc::new(GatedMenu {
            inner: InMemoryContextMenu::new(),
            gate: Notify::new(),
        });
        let sync = Arc::new(MenuSynchronizer::new(repo, menu.clone()));

        let first = tokio::spawn({
            let sync = Arc::clone(&sync);
            async move { sync.request_rebuild().await }
        });
        while sync.state() != SyncState::Rebuilding {
            tokio::task::yield_now().await;
        }

        let second = sync.request_rebuild().await.unwrap();
        assert_eq!(second, RebuildOutcome::Skipped);

        menu.gate.notify_one();
        let first = first.await.unwrap().unwrap();
        assert_eq!(first, RebuildOutcome::Rebuilt { items: 8 });
        assert_eq!(menu.inner.items().await.len(), 8);
        assert_eq!(sync.state(), SyncState::Idle);
    }

    /// Menu that rejects every create.
    struct BrokenMenu;

    #[async_trait]
    impl ContextMenuPort for BrokenMenu {
        async fn remove_all(&self) -> Result<(), MenuError> {
            Ok(())
        }

        async fn create(&self, _item: &MenuItemSpec) -> Result<(), MenuError> {
            Err(MenuError::Widget("unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failed_rebuild_returns_to_idle() {
        let repo = SiteRepository::new(Arc::new(MemoryKeyValueStore::default()));
        repo.initialize_if_empty().await.unwrap();
        let sync = MenuSynchronizer::new(repo, Arc::new(BrokenMenu));

        let err = sync.request_rebuild().await.unwrap_err();
        assert!(matches!(err, CoreError::Menu(MenuError::Widget(_))));
        assert_eq!(sync.state(), SyncState::Idle);

        // The next request is not dropped
        assert!(sync.request_rebuild().await.is_err());
    }

    async fn wait_for_items(menu: &InMemoryContextMenu, expected: usize) -> Vec<MenuItemSpec> {
        for _ in 0..200 {
            let items = menu.items().await;
            if items.len() == expected {
                return items;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        menu.items().await
    }

    #[tokio::test]
    async fn test_listener_rebuilds_on_site_change() {
        let (repo, menu, sync) = setup();
        let listener = sync.spawn_change_listener();

        repo.initialize_if_empty().await.unwrap();
        assert_eq!(wait_for_items(&menu, 8).await.len(), 8);

        repo.add(NewSite::new("Docs", "https://docs.rs/releases/search?query=%s"))
            .await
            .unwrap();
        let items = wait_for_items(&menu, 9).await;
        assert_eq!(items.last().map(|i| i.title.as_str()), Some("Docs"));

        listener.abort();
    }

    #[tokio::test]
    async fn test_listener_rebuilds_on_settings_change() {
        let (repo, menu, sync) = setup();
        repo.initialize_if_empty().await.unwrap();
        sync.request_rebuild().await.unwrap();
        let listener = sync.spawn_change_listener();

        repo.save_settings(&SettingsUpdate {
            use_flat_menu: Some(true),
        })
        .await
        .unwrap();

        let items = wait_for_items(&menu, 7).await;
        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|i| i.parent_id.is_none()));

        listener.abort();
    }
}
