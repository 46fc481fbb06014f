use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::ports::Storage;

const BLOB_EXTENSION: &str = "blob";

/// Blob store backed by one file per key under `root`.
///
/// File names are the base64url encoding of the key plus `.blob`, so any
/// non-empty key maps to a single file directly under `root`. Other files in
/// `root` are not part of the store.
#[derive(Debug, Clone)]
pub struct LocalStorageImpl {
    root: PathBuf,
}

impl LocalStorageImpl {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, key: &str) -> anyhow::Result<PathBuf> {
        ensure!(!key.is_empty(), "blob key must not be empty");
        let name = format!("{}.{}", URL_SAFE_NO_PAD.encode(key), BLOB_EXTENSION);
        Ok(self.root.join(name))
    }

    fn key_of(file_name: &str) -> Option<String> {
        let encoded = file_name.strip_suffix(BLOB_EXTENSION)?.strip_suffix('.')?;
        let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
        String::from_utf8(bytes).ok()
    }
}

impl Storage for LocalStorageImpl {
    type Error = anyhow::Error;

    async fn get(&mut self, key: &str) -> Result<Option<String>, Self::Error> {
        let path = self.path_of(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
        }
    }

    async fn put(&mut self, key: &str, data: String) -> Result<(), Self::Error> {
        let path = self.path_of(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("create {}", self.root.display()))?;
        tokio::fs::write(&path, data)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    async fn delete(&mut self, key: &str) -> Result<(), Self::Error> {
        let path = self.path_of(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("remove {}", path.display())),
        }
    }

    async fn list_keys(&mut self) -> Result<Vec<String>, Self::Error> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).with_context(|| format!("list {}", self.root.display())),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name();
            match name.to_str().and_then(Self::key_of) {
                Some(key) => keys.push(key),
                None => log::debug!("skip foreign file {:?}", name),
            }
        }
        keys.sort();

        Ok(keys)
    }
}
