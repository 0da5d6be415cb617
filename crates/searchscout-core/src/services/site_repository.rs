//! Site repository - owns the persisted site list and settings record.
//!
//! All state lives in the [`KeyValueStore`]. Every operation re-reads the
//! store before deciding anything, so no in-memory copy is ever trusted.
//!
//! Reads used for display (`get_all`, `get_enabled_sorted`, `get_settings`)
//! are fail-soft: a storage failure is logged and looks like empty storage.
//! Mutations read strictly and propagate storage errors, so a failed read
//! can never be written back as an empty list.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{MAX_SITES, SETTINGS_KEY, SITES_KEY};
use crate::domain::{NewSite, SearchSite, SiteUpdate, compact_order, default_sites, sorted_by_order};
use crate::events::StoreChange;
use crate::ports::{CoreError, KeyValueStore, RepositoryError};
use crate::settings::{Settings, SettingsUpdate};
use crate::utils::validation::{SiteValidationError, validate_site};

/// Repository for search sites and settings.
#[derive(Clone)]
pub struct SiteRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SiteRepository {
    /// Create a new repository over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All sites in storage sequence (not display order).
    ///
    /// Returns an empty list if storage cannot be read.
    pub async fn get_all(&self) -> Vec<SearchSite> {
        match self.try_get_all().await {
            Ok(sites) => sites,
            Err(e) => {
                warn!(error = %e, "Failed to read search sites, treating as empty");
                Vec::new()
            }
        }
    }

    /// All sites in storage sequence, propagating storage errors.
    pub async fn try_get_all(&self) -> Result<Vec<SearchSite>, RepositoryError> {
        match self.store.get(SITES_KEY).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Enabled sites sorted by `order`.
    pub async fn get_enabled_sorted(&self) -> Vec<SearchSite> {
        let enabled = self
            .get_all()
            .await
            .into_iter()
            .filter(|site| site.enabled)
            .collect();
        sorted_by_order(enabled)
    }

    /// Look up a single site by id.
    pub async fn find(&self, id: &str) -> Option<SearchSite> {
        self.get_all().await.into_iter().find(|site| site.id == id)
    }

    /// Append a new site at the end of the order.
    ///
    /// Validation happens before anything is read or written.
    pub async fn add(&self, site: NewSite) -> Result<SearchSite, CoreError> {
        validate_site(&site.name, &site.url)?;

        let mut sites = self.try_get_all().await?;
        if sites.len() >= MAX_SITES {
            return Err(SiteValidationError::TooManySites.into());
        }

        let created = SearchSite {
            id: Uuid::new_v4().to_string(),
            name: site.name,
            url: site.url,
            enabled: true,
            is_default: false,
            order: u32::try_from(sites.len()).unwrap_or(u32::MAX),
        };
        sites.push(created.clone());
        self.save_sites(&sites).await?;

        info!(site_id = %created.id, name = %created.name, "Added search site");
        Ok(created)
    }

    /// Merge `update` into the site with `id`.
    ///
    /// Returns `Ok(None)` if no such site exists. When name or url change,
    /// the merged record is validated before writing.
    pub async fn update(
        &self,
        id: &str,
        update: &SiteUpdate,
    ) -> Result<Option<SearchSite>, CoreError> {
        let mut sites = self.try_get_all().await?;
        let Some(site) = sites.iter_mut().find(|site| site.id == id) else {
            debug!(site_id = %id, "Update for unknown site ignored");
            return Ok(None);
        };

        let mut merged = site.clone();
        update.apply(&mut merged);
        if update.touches_template() {
            validate_site(&merged.name, &merged.url)?;
        }
        *site = merged.clone();

        self.save_sites(&sites).await?;
        debug!(site_id = %id, enabled = merged.enabled, "Updated search site");
        Ok(Some(merged))
    }

    /// Delete the site with `id`.
    ///
    /// Returns `Ok(false)` if no such site exists. Default sites are refused
    /// with [`CoreError::DefaultSiteProtected`]. Remaining orders are
    /// compacted to `0..N-1`.
    pub async fn delete(&self, id: &str) -> Result<bool, CoreError> {
        let mut sites = self.try_get_all().await?;
        let Some(index) = sites.iter().position(|site| site.id == id) else {
            debug!(site_id = %id, "Delete for unknown site ignored");
            return Ok(false);
        };
        if sites[index].is_default {
            return Err(CoreError::DefaultSiteProtected(id.to_string()));
        }

        let removed = sites.remove(index);
        compact_order(&mut sites);
        self.save_sites(&sites).await?;

        info!(site_id = %id, name = %removed.name, "Deleted search site");
        Ok(true)
    }

    /// Overwrite the whole list in one write.
    ///
    /// Callers are responsible for passing a list with dense orders.
    pub async fn replace_all(&self, sites: &[SearchSite]) -> Result<(), CoreError> {
        self.save_sites(sites).await.map_err(CoreError::from)
    }

    /// Seed the default sites if storage holds none.
    ///
    /// Returns `true` if seeding happened. Safe to call on every startup.
    /// A read failure is propagated rather than treated as empty, so user
    /// data is never replaced by defaults.
    pub async fn initialize_if_empty(&self) -> Result<bool, CoreError> {
        if !self.try_get_all().await?.is_empty() {
            return Ok(false);
        }
        let defaults = default_sites();
        self.save_sites(&defaults).await?;
        info!(count = defaults.len(), "Seeded default search sites");
        Ok(true)
    }

    /// Current settings, or defaults if none are stored or storage fails.
    pub async fn get_settings(&self) -> Settings {
        match self.try_get_settings().await {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Failed to read settings, using defaults");
                Settings::default()
            }
        }
    }

    /// Merge `update` into the stored settings and persist the result.
    pub async fn save_settings(&self, update: &SettingsUpdate) -> Result<Settings, CoreError> {
        let mut settings = self.try_get_settings().await?;
        settings.merge(update);
        let value = serde_json::to_value(settings).map_err(RepositoryError::from)?;
        self.store.set(SETTINGS_KEY, value).await?;
        debug!(use_flat_menu = settings.use_flat_menu, "Saved settings");
        Ok(settings)
    }

    /// Subscribe to change notifications from the underlying store.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.store.subscribe()
    }

    async fn try_get_settings(&self) -> Result<Settings, RepositoryError> {
        match self.store.get(SETTINGS_KEY).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Settings::default()),
        }
    }

    async fn save_sites(&self, sites: &[SearchSite]) -> Result<(), RepositoryError> {
        let value: Value = serde_json::to_value(sites)?;
        self.store.set(SITES_KEY, value).await
    }
}
