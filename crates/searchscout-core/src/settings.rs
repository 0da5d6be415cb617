//! Settings domain types.
//!
//! This module contains the persisted display settings. These are pure
//! domain types with no infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Extension settings.
///
/// Missing fields deserialize to their defaults, so a record written by an
/// older release (or an empty object) still loads.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Show one top-level menu entry per site instead of a nested submenu.
    pub use_flat_menu: bool,
}

impl Settings {
    /// Merge a partial update, only touching fields that are `Some`.
    pub fn merge(&mut self, update: &SettingsUpdate) {
        if let Some(flat) = update.use_flat_menu {
            self.use_flat_menu = flat;
        }
    }
}

/// Partial settings update. `None` means "leave unchanged".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub use_flat_menu: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nested() {
        assert!(!Settings::default().use_flat_menu);
    }

    #[test]
    fn test_merge_ignores_unset_fields() {
        let mut settings = Settings {
            use_flat_menu: true,
        };
        settings.merge(&SettingsUpdate::default());
        assert!(settings.use_flat_menu);

        settings.merge(&SettingsUpdate {
            use_flat_menu: Some(false),
        });
        assert!(!settings.use_flat_menu);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&Settings {
            use_flat_menu: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"useFlatMenu":true}"#);
    }
}
