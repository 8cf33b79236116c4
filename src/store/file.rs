use super::KeyValueStore;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// File backing: one UTF-8 file per key under a base directory.
///
/// The directory is created on the first write, so pointing at a fresh
/// path just starts an empty store.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        FileStore { base: base.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        tokio::fs::read_to_string(self.key_path(key)).await.ok()
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        tokio::fs::create_dir_all(&self.base)
            .await
            .with_context(|| format!("Failed to create data directory {}", self.base.display()))?;
        tokio::fs::write(self.key_path(key), value)
            .await
            .with_context(|| format!("Failed to write {key}"))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match tokio::fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {key}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn values_survive_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::new(dir.path());
            store.put("greeting", "hola".to_string()).await.unwrap();
        }
        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get("greeting").await.as_deref(), Some("hola"));
    }

    #[tokio::test]
    async fn a_fresh_directory_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-written"));
        assert_eq!(store.get("users").await, None);
    }

    #[tokio::test]
    async fn remove_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.remove("nothing").await.unwrap();
    }

    #[tokio::test]
    async fn put_overwrites_the_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.put("greeting", "hola".to_string()).await.unwrap();
        store.put("greeting", "adiós".to_string()).await.unwrap();
        assert_eq!(store.get("greeting").await.as_deref(), Some("adiós"));
    }
}
