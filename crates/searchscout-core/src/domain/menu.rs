//! Context menu plan and click event types.
//!
//! The plan is a pure function of settings and enabled sites; the
//! synchronizer applies it to the live widget.

use serde::{Deserialize, Serialize};

use super::site::SearchSite;
use crate::config::PARENT_MENU_ID;
use crate::settings::Settings;

/// Page contexts a menu entry is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuContext {
    Selection,
}

/// One entry to create in the context menu widget.
///
/// Titles may contain `%s`, which the widget itself replaces with the
/// current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemSpec {
    pub id: String,
    pub title: String,
    pub parent_id: Option<String>,
    pub contexts: Vec<MenuContext>,
}

impl MenuItemSpec {
    fn selection(id: impl Into<String>, title: String, parent_id: Option<String>) -> Self {
        Self {
            id: id.into(),
            title,
            parent_id,
            contexts: vec![MenuContext::Selection],
        }
    }
}

/// Menu shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTopology {
    /// One top-level entry per site.
    Flat,
    /// A single parent entry with one child per site.
    Nested,
}

impl MenuTopology {
    pub const fn from_settings(settings: &Settings) -> Self {
        if settings.use_flat_menu {
            Self::Flat
        } else {
            Self::Nested
        }
    }
}

/// Derive the menu entries for `sites`, which must already be filtered to
/// enabled sites and sorted by `order`.
pub fn plan_menu(settings: &Settings, sites: &[SearchSite]) -> Vec<MenuItemSpec> {
    if sites.is_empty() {
        return Vec::new();
    }

    match MenuTopology::from_settings(settings) {
        MenuTopology::Flat => sites
            .iter()
            .map(|site| {
                MenuItemSpec::selection(
                    site.id.clone(),
                    format!("Search {} for \"%s\"", site.name),
                    None,
                )
            })
            .collect(),
        MenuTopology::Nested => {
            let mut items = Vec::with_capacity(sites.len() + 1);
            items.push(MenuItemSpec::selection(
                PARENT_MENU_ID,
                "Search for \"%s\"".to_string(),
                None,
            ));
            items.extend(sites.iter().map(|site| {
                MenuItemSpec::selection(
                    site.id.clone(),
                    site.name.clone(),
                    Some(PARENT_MENU_ID.to_string()),
                )
            }));
            items
        }
    }
}

/// A click reported by the context menu widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuClick {
    pub menu_item_id: String,
    pub parent_menu_item_id: Option<String>,
    pub selection_text: Option<String>,
}

impl MenuClick {
    pub fn new(
        menu_item_id: impl Into<String>,
        parent_menu_item_id: Option<String>,
        selection_text: Option<String>,
    ) -> Self {
        Self {
            menu_item_id: menu_item_id.into(),
            parent_menu_item_id,
            selection_text,
        }
    }

    /// A click on a nested child entry.
    pub fn nested(menu_item_id: impl Into<String>, selection: impl Into<String>) -> Self {
        Self::new(
            menu_item_id,
            Some(PARENT_MENU_ID.to_string()),
            Some(selection.into()),
        )
    }

    /// A click on a flat top-level entry.
    pub fn flat(menu_item_id: impl Into<String>, selection: impl Into<String>) -> Self {
        Self::new(menu_item_id, None, Some(selection.into()))
    }

    /// Whether the click came from a menu this extension owns.
    pub fn is_relevant(&self) -> bool {
        match self.parent_menu_item_id.as_deref() {
            None => true,
            Some(parent) => parent == PARENT_MENU_ID,
        }
    }
}
