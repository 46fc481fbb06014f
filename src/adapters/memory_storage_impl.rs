use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use crate::ports::Storage;

/// Process-local blob store. Clones share the same map.
///
/// Keys are stored under `prefix`; `list_keys` only reports keys inside it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorageImpl {
    blobs: Arc<Mutex<BTreeMap<String, String>>>,
    prefix: String,
}

impl MemoryStorageImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view of the same map that stores its keys under `prefix`.
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
        Self {
            blobs: self.blobs.clone(),
            prefix: prefix.into(),
        }
    }

    fn with_blobs<T>(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> T) -> anyhow::Result<T> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| anyhow!("memory storage lock poisoned"))?;
        Ok(f(&mut blobs))
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl Storage for MemoryStorageImpl {
    type Error = anyhow::Error;

    async fn get(&mut self, key: &str) -> Result<Option<String>, Self::Error> {
        let key = self.full_key(key);
        self.with_blobs(|blobs| blobs.get(&key).cloned())
    }

    async fn put(&mut self, key: &str, data: String) -> Result<(), Self::Error> {
        let key = self.full_key(key);
        self.with_blobs(|blobs| {
            blobs.insert(key, data);
        })
    }

    async fn delete(&mut self, key: &str) -> Result<(), Self::Error> {
        let key = self.full_key(key);
        self.with_blobs(|blobs| {
            blobs.remove(&key);
        })
    }

    async fn list_keys(&mut self) -> Result<Vec<String>, Self::Error> {
        self.with_blobs(|blobs| {
            blobs
                .keys()
                .filter_map(|key| key.strip_prefix(self.prefix.as_str()))
                .map(str::to_owned)
                .collect()
        })
    }
}
