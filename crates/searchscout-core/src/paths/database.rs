//! Database path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// File name of the `SQLite` database holding the persisted store.
pub const DATABASE_FILE_NAME: &str = "searchscout.db";

/// Get the path to the database file under `root`.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_path_ends_with_db_name() {
        let dir = tempdir().unwrap();
        let path = database_path(dir.path()).unwrap();
        assert!(path.to_string_lossy().ends_with("searchscout.db"));
        assert!(dir.path().join("data").is_dir());
    }
}
