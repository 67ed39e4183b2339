//! Durable string key-value storage backed by a directory.
//!
//! Each key is one file; values are the file contents. This is the
//! client-side analog of a mobile platform's async key-value store,
//! small enough to stay synchronous.

use std::fs;
use std::path::PathBuf;

use crate::client::ClientError;

#[derive(Debug, Clone)]
pub struct KeyValueStorage {
    dir: PathBuf,
}

impl KeyValueStorage {
    /// Open (and create if needed) a storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Read a value. A missing or unreadable entry is `None`, never an
    /// error: callers treat absence as logged-out/empty state.
    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    /// Write a value, replacing any previous one.
    pub fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    /// Remove a value. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<(), ClientError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = KeyValueStorage::open(dir.path()).unwrap();

        assert_eq!(storage.get("missing"), None);

        storage.set("key", "value").unwrap();
        assert_eq!(storage.get("key").as_deref(), Some("value"));

        storage.remove("key").unwrap();
        assert_eq!(storage.get("key"), None);

        // Removing again is fine.
        storage.remove("key").unwrap();
    }
}
