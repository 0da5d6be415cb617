//! Data root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "SEARCHSCOUT_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `SEARCHSCOUT_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/searchscout`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        return normalize_user_path(&path);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    let root = data_dir.join("searchscout");
    ensure_dir(&root)?;
    Ok(root)
}

/// Resolve the data root, preferring an explicit override (e.g. a CLI flag).
pub fn resolve_data_root(override_path: Option<&str>) -> Result<PathBuf, PathError> {
    match override_path {
        Some(raw) => {
            let root = normalize_user_path(raw)?;
            ensure_dir(&root)?;
            Ok(root)
        }
        None => data_root(),
    }
}

fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed == "~" {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?.join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        let cwd = env::current_dir().map_err(|_| PathError::NoDataDir)?;
        Ok(cwd.join(expanded))
    }
}
