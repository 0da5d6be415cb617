//! Store change notifications.
//!
//! The persisted store broadcasts a [`StoreChange`] after every write. The
//! menu synchronizer is the main consumer.

use serde::{Deserialize, Serialize};

use crate::config::{SETTINGS_KEY, SITES_KEY};

/// Storage area a key lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageArea {
    /// Synced preference storage. The only area observed for menu rebuilds.
    Sync,
    /// Device-local storage.
    Local,
}

impl StorageArea {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Local => "local",
        }
    }
}

impl std::fmt::Display for StorageArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of keys changed in one storage area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreChange {
    pub area: StorageArea,
    pub keys: Vec<String>,
}

impl StoreChange {
    pub fn new(area: StorageArea, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            area,
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this change can alter the context menu.
    pub fn affects_menu(&self) -> bool {
        self.area == StorageArea::Sync
            && self
                .keys
                .iter()
                .any(|key| key == SITES_KEY || key == SETTINGS_KEY)
    }
}
