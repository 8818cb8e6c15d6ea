use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Minimal key-value contract the credential store is written against.
///
/// Production uses the file-backed [`FileStore`]; tests substitute
/// [`MemoryStore`] so the token lifecycle can be exercised without touching
/// the filesystem.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Key-value store persisted as a single JSON object on disk, surviving
/// process restarts.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        FileStore { path }
    }

    /// Default location: `moodtunes/cache/credentials.json` under the
    /// platform local data directory.
    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("moodtunes/cache/credentials.json");
        path
    }

    async fn load_map(&self) -> Result<HashMap<String, String>> {
        match async_fs::read_to_string(&self.path).await {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| Error::Storage(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(Error::Storage(e.to_string())),
        }
    }

    async fn store_map(&self, map: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::Storage(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(map).map_err(|e| Error::Storage(e.to_string()))?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| Error::Storage(e.to_string()))
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_map().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.store_map(&map).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut map = self.load_map().await?;
        if map.remove(key).is_some() {
            return self.store_map(&map).await;
        }
        Ok(())
    }
}

/// In-memory key-value store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
