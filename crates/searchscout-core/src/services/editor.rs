//! Editor controller - data operations behind the settings editor.
//!
//! The editor UI renders sites and collects form input; this controller
//! normalizes and validates that input, then persists it through the
//! repository. On a write failure callers reload via [`EditorController::list`]
//! and discard any optimistic UI state.

use tracing::debug;

use super::SiteRepository;
use crate::domain::{NewSite, SearchSite, SiteUpdate, apply_display_order, sorted_by_order};
use crate::ports::CoreError;
use crate::settings::{Settings, SettingsUpdate};
use crate::utils::validation::{SiteValidationError, validate_site};

/// Validates and persists edits from the settings editor.
pub struct EditorController {
    repo: SiteRepository,
}

impl EditorController {
    pub fn new(repo: SiteRepository) -> Self {
        Self { repo }
    }

    /// All sites in display order.
    pub async fn list(&self) -> Vec<SearchSite> {
        sorted_by_order(self.repo.get_all().await)
    }

    /// Validate form input without persisting anything.
    pub fn validate(name: &str, url: &str) -> Result<(), SiteValidationError> {
        validate_site(name.trim(), url.trim())
    }

    /// Create a site from the add form.
    pub async fn add(&self, name: &str, url: &str) -> Result<SearchSite, CoreError> {
        let (name, url) = (name.trim(), url.trim());
        validate_site(name, url)?;
        self.repo.add(NewSite::new(name, url)).await
    }

    /// Save the edit form for an existing site.
    ///
    /// Returns `Ok(None)` if the site no longer exists.
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        url: &str,
    ) -> Result<Option<SearchSite>, CoreError> {
        let (name, url) = (name.trim(), url.trim());
        validate_site(name, url)?;
        let update = SiteUpdate {
            name: Some(name.to_string()),
            url: Some(url.to_string()),
            enabled: None,
        };
        self.repo.update(id, &update).await
    }

    /// Toggle a site on or off.
    pub async fn set_enabled(
        &self,
        id: &str,
        enabled: bool,
    ) -> Result<Option<SearchSite>, CoreError> {
        self.repo.update(id, &SiteUpdate::enabled(enabled)).await
    }

    /// Delete a user-added site. Returns `Ok(false)` if it no longer exists.
    pub async fn delete(&self, id: &str) -> Result<bool, CoreError> {
        self.repo.delete(id).await
    }

    /// Persist a new display order after a drag gesture.
    ///
    /// Reads the full stored list, rewrites every `order` to match the
    /// displayed position and saves the list in a single write. Returns the
    /// sites in their new display order.
    pub async fn reorder(&self, displayed_ids: &[String]) -> Result<Vec<SearchSite>, CoreError> {
        let mut sites = self.repo.try_get_all().await?;
        apply_display_order(&mut sites, displayed_ids);
        self.repo.replace_all(&sites).await?;
        debug!(count = sites.len(), "Saved new site order");
        Ok(sorted_by_order(sites))
    }

    /// Current settings.
    pub async fn settings(&self) -> Settings {
        self.repo.get_settings().await
    }

    /// Switch between flat and nested menus.
    pub async fn set_flat_menu(&self, flat: bool) -> Result<Settings, CoreError> {
        self.repo
            .save_settings(&SettingsUpdate {
                use_flat_menu: Some(flat),
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::StorageArea;
    use crate::ports::{MemoryKeyValueStore, RepositoryError};
    use crate::services::test_support::FlakyStore;
    use std::sync::Arc;

    async fn seeded() -> EditorController {
        let repo = SiteRepository::new(Arc::new(MemoryKeyValueStore::default()));
        repo.initialize_if_empty().await.unwrap();
        EditorController::new(repo)
    }

    fn ids(sites: &[SearchSite]) -> Vec<&str> {
        sites.iter().map(|s| s.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_add_trims_input() {
        let editor = seeded().await;
        let site = editor
            .add("  Crates  ", "  https://crates.io/search?q=%s ")
            .await
            .unwrap();
        assert_eq!(site.name, "Crates");
        assert_eq!(site.url, "https://crates.io/search?q=%s");
        assert_eq!(editor.list().await.last().unwrap().id, site.id);
    }

    #[tokio::test]
    async fn test_add_whitespace_name_is_empty() {
        let editor = seeded().await;
        let err = editor
            .add("   ", "https://crates.io/search?q=%s")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(SiteValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_validate_is_pure() {
        assert!(EditorController::validate("A", "https://a.example/?q=%s").is_ok());
        assert_eq!(
            EditorController::validate("A", "a.example"),
            Err(SiteValidationError::InvalidUrl)
        );
    }

    #[tokio::test]
    async fn test_update_edits_name_and_url() {
        let editor = seeded().await;
        let updated = editor
            .update("default-bing", "Bing Images", "https://www.bing.com/images/search?q=%s")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Bing Images");
        assert!(updated.is_default);
        assert_eq!(updated.order, 2);
    }

    #[tokio::test]
    async fn test_update_missing_site() {
        let editor = seeded().await;
        assert!(
            editor
                .update("missing", "A", "https://a.example/?q=%s")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_toggle() {
        let editor = seeded().await;
        editor.set_enabled("default-github", false).await.unwrap();
        let github = editor
            .list()
            .await
            .into_iter()
            .find(|s| s.id == "default-github")
            .unwrap();
        assert!(!github.enabled);
    }

    #[tokio::test]
    async fn test_reorder_moves_to_display_position() {
        let editor = seeded().await;
        let mut displayed: Vec<String> = editor.list().await.into_iter().map(|s| s.id).collect();
        let youtube = displayed.pop().unwrap();
        displayed.insert(0, youtube);

        let reordered = editor.reorder(&displayed).await.unwrap();

        assert_eq!(reordered[0].id, "default-youtube");
        assert_eq!(reordered[0].order, 0);
        assert_eq!(reordered[1].id, "default-google");
        let listed = editor.list().await;
        assert_eq!(ids(&listed), ids(&reordered));
        let orders: Vec<u32> = listed.iter().map(|s| s.order).collect();
        assert_eq!(orders, (0..7).collect::<Vec<u32>>());
    }

    #[tokio::test]
    async fn test_delete_after_reorder_keeps_display_order() {
        let editor = seeded().await;
        let added = editor.add("Mine", "https://mine.example/?q=%s").await.unwrap();
        let mut displayed: Vec<String> = editor.list().await.into_iter().map(|s| s.id).collect();
        displayed.retain(|id| id != &added.id);
        displayed.insert(0, added.id.clone());
        displayed.swap(1, 2);
        editor.reorder(&displayed).await.unwrap();

        let before: Vec<String> = editor
            .list()
            .await
            .into_iter()
            .map(|s| s.id)
            .filter(|id| id != &added.id)
            .collect();
        assert!(editor.delete(&added.id).await.unwrap());

        let after = editor.list().await;
        let after_ids: Vec<String> = after.iter().map(|s| s.id.clone()).collect();
        assert_eq!(after_ids, before);
        assert_eq!(after[0].order, 0);
        assert_eq!(after[0].id, "default-duckduckgo");
    }

    #[tokio::test]
    async fn test_delete_default_is_refused() {
        let editor = seeded().await;
        let err = editor.delete("default-google").await.unwrap_err();
        assert!(err.is_user_correctable());
    }

    #[tokio::test]
    async fn test_reorder_read_failure_writes_nothing() {
        let store = Arc::new(FlakyStore::new(StorageArea::Sync));
        let repo = SiteRepository::new(store.clone());
        repo.initialize_if_empty().await.unwrap();
        let editor = EditorController::new(repo);
        store.set_fail_reads(true);

        let err = editor
            .reorder(&["default-youtube".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Repository(RepositoryError::Storage(_))));

        store.set_fail_reads(false);
        assert_eq!(editor.list().await[0].id, "default-google");
    }

    #[tokio::test]
    async fn test_flat_menu_setting() {
        let editor = seeded().await;
        assert!(!editor.settings().await.use_flat_menu);
        editor.set_flat_menu(true).await.unwrap();
        assert!(editor.settings().await.use_flat_menu);
    }
}
