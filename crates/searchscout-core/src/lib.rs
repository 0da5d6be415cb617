//! Core of searchscout: search the selected text on configurable sites from
//! a context menu.
//!
//! The crate keeps three surfaces consistent: the persisted site list and
//! settings, the host's context menu, and the settings editor.
//!
//! - [`services::SiteRepository`] owns persisted state
//! - [`services::MenuSynchronizer`] rebuilds the menu on every relevant change
//! - [`services::SelectionDispatcher`] turns menu clicks into search tabs
//! - [`services::EditorController`] validates and persists editor input
//!
//! Hosts supply the [`ports`] and drive everything through [`AppCore`].
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    MenuClick, MenuContext, MenuItemSpec, MenuTopology, NewSite, SearchSite, SiteUpdate,
    default_sites, plan_menu,
};
pub use events::{StorageArea, StoreChange};
pub use ports::{
    ContextMenuPort, CoreError, InMemoryContextMenu, KeyValueStore, MemoryKeyValueStore,
    MenuError, RepositoryError, TabError, TabOpener,
};
pub use services::{
    AppCore, DispatchOutcome, EditorController, MenuSynchronizer, RebuildOutcome,
    SelectionDispatcher, SiteRepository, SyncState,
};
pub use settings::{Settings, SettingsUpdate};
pub use utils::validation::{SiteValidationError, validate_site};
