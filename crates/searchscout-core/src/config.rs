//! Centralized configuration constants.
//!
//! Storage keys, menu identifiers and validation limits shared by every
//! service. Adapters read these rather than hardcoding values.

/// Storage key holding the serialized list of search sites.
pub const SITES_KEY: &str = "searchSites";

/// Storage key holding the serialized [`Settings`](crate::Settings) record.
pub const SETTINGS_KEY: &str = "settings";

/// Identifier of the parent entry in the nested menu topology.
pub const PARENT_MENU_ID: &str = "custom-search-parent";

/// Maximum length of a site name, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

/// Token marking where the encoded selection is inserted into a URL template.
pub const PLACEHOLDER_TOKEN: &str = "%s";

/// Upper bound on stored sites, to keep the synced record small.
pub const MAX_SITES: usize = 50;
