//! The single-file item store.
//!
//! The whole collection lives in one JSON file. Loading swallows every
//! failure — a missing, unreadable, or malformed file is just an empty
//! list. Saving rewrites the full collection atomically.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Item;

/// File name of the store inside the app data directory
pub const STORE_FILE: &str = "todos.json";

/// Error type for store writes
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot determine a data directory for the todo store")]
    NoDataDir,
    #[error("cannot create {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("cannot serialize todo list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Default store path: `<platform data dir>/tick/todos.json`
pub fn default_store_path() -> Result<PathBuf, StoreError> {
    let base = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
    Ok(base.join("tick").join(STORE_FILE))
}

/// Read the stored collection.
/// Missing file or content that doesn't parse as a list of items → empty list.
pub fn load(path: &Path) -> Vec<Item> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&content).unwrap_or_default()
}

/// Serialize the full collection and replace the store file atomically
/// (write to a temp file in the same directory, then rename over).
pub fn save(path: &Path, items: &[Item]) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(items)?;

    let dir = path.parent().unwrap_or(Path::new("."));
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> Vec<Item> {
        vec![
            Item {
                id: "id-1".into(),
                text: "Buy milk".into(),
                completed: false,
            },
            Item {
                id: "id-2".into(),
                text: "Walk dog".into(),
                completed: true,
            },
        ]
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);
        let items = sample();

        save(&path, &items).unwrap();
        let loaded = load(&path);
        assert_eq!(loaded, items);
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join(STORE_FILE)).is_empty());
    }

    #[test]
    fn load_malformed_json_returns_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, "not json {{{").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn load_wrong_shape_returns_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);
        // Valid JSON, wrong structure — treated as absent, not migrated
        fs::write(&path, r#"{"version": 2, "todos": []}"#).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join(STORE_FILE);
        save(&path, &sample()).unwrap();
        assert_eq!(load(&path).len(), 2);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);
        save(&path, &sample()).unwrap();
        save(&path, &[]).unwrap();
        assert!(load(&path).is_empty());
    }
}
