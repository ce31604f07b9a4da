//! Local-filesystem blob backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use makerslab_core::upload::is_safe_key;

use crate::{guess_content_type, BlobStore, StorageError, StoredBlob};

/// URL prefix under which local uploads are served.
pub const LOCAL_URL_PREFIX: &str = "/uploads";

/// Stores blobs as files directly under `root`.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_safe_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(
        &self,
        name: &str,
        bytes: &[u8],
        _content_type: &str,
    ) -> Result<String, StorageError> {
        let target = self.resolve(name)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write to a staging file first so a failed write never leaves a
        // truncated object at the final path.
        let file_name = target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name)
            .to_string();
        let staging = target.with_file_name(format!(".{file_name}.part"));
        let written = match tokio::fs::write(&staging, bytes).await {
            Ok(()) => tokio::fs::rename(&staging, &target).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
                tracing::warn!(
                    path = %staging.display(),
                    error = %cleanup,
                    "Failed to remove staging file"
                );
            }
            return Err(e.into());
        }

        tracing::debug!(path = %target.display(), size = bytes.len(), "Stored upload");
        Ok(format!("{LOCAL_URL_PREFIX}/{name}"))
    }

    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, StorageError> {
        let path = self.resolve(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(StoredBlob {
                bytes,
                content_type: guess_content_type(key),
            })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
