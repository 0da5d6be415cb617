//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Database pool and key-value store (via searchscout-db)
//! - In-memory context menu the terminal renders
//! - Tab opener (system browser or dry run)
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use searchscout_core::paths::{database_path, resolve_data_root};
use searchscout_core::services::AppCore;
use searchscout_core::{InMemoryContextMenu, TabOpener};
use searchscout_db::{CoreFactory, setup_database};

use crate::browser::{DryRun, SystemBrowser};

/// How search results are opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowserMode {
    /// Launch the system browser.
    #[default]
    System,
    /// Open nothing; the handler prints the URL.
    PrintOnly,
}

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Data directory override from `--data-dir`.
    pub data_dir: Option<String>,
    /// Tab opener selection.
    pub browser: BrowserMode,
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// The menu widget the synchronizer writes into.
    pub menu: Arc<InMemoryContextMenu>,
    /// Resolved data root.
    pub data_root: PathBuf,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Access the rendered menu.
    pub const fn menu(&self) -> &Arc<InMemoryContextMenu> {
        &self.menu
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Resolves the data directory and opens the database
/// 2. Creates the menu widget and tab opener
/// 3. Assembles the `AppCore` over the synced storage area
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    // 1. Open the database with full schema setup
    let data_root = resolve_data_root(config.data_dir.as_deref())?;
    let db_path = database_path(&data_root)?;
    let pool = setup_database(&db_path).await?;
    debug!(path = %db_path.display(), "Opened site storage");

    // 2. Host surfaces
    let menu = Arc::new(InMemoryContextMenu::new());
    let tabs: Arc<dyn TabOpener> = match config.browser {
        BrowserMode::System => Arc::new(SystemBrowser),
        BrowserMode::PrintOnly => Arc::new(DryRun),
    };

    // 3. Compose
    let app = CoreFactory::build_app_core(pool, menu.clone(), tabs);

    Ok(CliContext {
        app,
        menu,
        data_root,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_for(dir: &std::path::Path) -> CliConfig {
        CliConfig {
            data_dir: Some(dir.to_string_lossy().into_owned()),
            browser: BrowserMode::PrintOnly,
        }
    }

    #[tokio::test]
    async fn test_bootstrap_creates_database_under_data_root() {
        let dir = tempdir().unwrap();
        let ctx = bootstrap(config_for(dir.path())).await.unwrap();

        assert_eq!(ctx.data_root, dir.path());
        assert!(dir.path().join("data").join("searchscout.db").exists());
    }

    #[tokio::test]
    async fn test_state_survives_a_second_bootstrap() {
        let dir = tempdir().unwrap();

        let first = bootstrap(config_for(dir.path())).await.unwrap();
        first.app().on_installed().await.unwrap();
        first
            .app()
            .editor()
            .add("Crates", "https://crates.io/search?q=%s")
            .await
            .unwrap();
        drop(first);

        let second = bootstrap(config_for(dir.path())).await.unwrap();
        let sites = second.app().editor().list().await;
        assert_eq!(sites.len(), 8);
        assert_eq!(sites[7].name, "Crates");
    }
}
