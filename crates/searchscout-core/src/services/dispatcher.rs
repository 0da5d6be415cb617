//! Selection dispatcher - turns menu clicks into search tabs.

use std::sync::Arc;

use tracing::{debug, info};

use super::SiteRepository;
use crate::domain::MenuClick;
use crate::ports::{CoreError, TabOpener};

/// What a click resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The click belongs to a menu this extension does not own.
    Ignored,
    /// The clicked id matches no enabled site (stale menu).
    UnknownSite,
    /// The click carried no selected text.
    EmptySelection,
    /// A tab was opened at this URL.
    Opened { url: String },
}

/// Maps menu clicks to sites and opens the search URL.
pub struct SelectionDispatcher {
    repo: SiteRepository,
    tabs: Arc<dyn TabOpener>,
}

impl SelectionDispatcher {
    pub fn new(repo: SiteRepository, tabs: Arc<dyn TabOpener>) -> Self {
        Self { repo, tabs }
    }

    /// Handle one click from the context menu widget.
    ///
    /// Only a failure to open the tab is an error; every other mismatch is
    /// a silent no-op reported through [`DispatchOutcome`].
    pub async fn handle_click(&self, click: &MenuClick) -> Result<DispatchOutcome, CoreError> {
        if !click.is_relevant() {
            debug!(parent = ?click.parent_menu_item_id, "Ignoring click from foreign menu");
            return Ok(DispatchOutcome::Ignored);
        }

        let sites = self.repo.get_enabled_sorted().await;
        let Some(site) = sites.iter().find(|site| site.id == click.menu_item_id) else {
            debug!(menu_item_id = %click.menu_item_id, "Click on unknown or disabled site");
            return Ok(DispatchOutcome::UnknownSite);
        };

        let selection = click.selection_text.as_deref().unwrap_or_default();
        if selection.is_empty() {
            return Ok(DispatchOutcome::EmptySelection);
        }

        let url = site.search_url(selection);
        self.tabs.open_tab(&url).await?;
        info!(site_id = %site.id, %url, "Opened search tab");
        Ok(DispatchOutcome::Opened { url })
    }
}
