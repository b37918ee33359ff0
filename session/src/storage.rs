use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stored game data could not be encoded or decoded: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value collaborator the game store persists through. Writes are never
/// retried; a failed one only costs that update on the next restart.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile storage for tests and throwaway sessions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// One file per key under a directory, the native stand-in for the browser
/// local storage the game originally shipped with.
#[derive(Clone, Debug, PartialEq)]
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(file_name)
    }
}

impl Storage for DirStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_values() {
        let mut storage = MemoryStorage::new();

        assert!(storage.get("missing").unwrap().is_none());

        storage.set("games", "{}").unwrap();
        assert_eq!(storage.get("games").unwrap().as_deref(), Some("{}"));

        storage.set("games", "{\"a\":1}").unwrap();
        assert_eq!(storage.get("games").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn dir_storage_round_trips_values() {
        let root = std::env::temp_dir().join(format!("palabrita-test-{}", std::process::id()));
        let mut storage = DirStorage::new(&root);

        assert!(storage.get("palabrita:games:v1").unwrap().is_none());

        storage.set("palabrita:games:v1", "{}").unwrap();
        assert_eq!(
            storage.get("palabrita:games:v1").unwrap().as_deref(),
            Some("{}")
        );

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn dir_storage_sanitizes_key_characters() {
        let storage = DirStorage::new("/tmp/games");

        let path = storage.key_path("palabrita:games:v1");

        assert_eq!(path, PathBuf::from("/tmp/games/palabrita_games_v1"));
    }
}
