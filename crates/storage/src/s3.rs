//! S3 blob backend.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use makerslab_core::upload::is_safe_key;

use crate::{guess_content_type, BlobStore, StorageError, StoredBlob};

/// URL prefix under which object-store uploads are served.
pub const OBJECT_URL_PREFIX: &str = "/objects";

/// Stores blobs as objects in one bucket under a key prefix.
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3BlobStore {
    pub fn new(client: Client, bucket: impl Into<String>, prefix: &str) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix: prefix.trim_matches('/').to_string(),
        }
    }

    /// Build a client from the ambient AWS configuration (environment,
    /// profile, or instance metadata).
    pub async fn from_env(bucket: impl Into<String>, prefix: &str) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), bucket, prefix)
    }

    pub fn object_key(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}/{name}", self.prefix)
        }
    }

    /// Whether `key` lies under this store's prefix, i.e. could have been
    /// written by [`BlobStore::put`].
    fn owns_key(&self, key: &str) -> bool {
        self.prefix.is_empty()
            || key
                .strip_prefix(self.prefix.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
                .is_some_and(|name| !name.is_empty())
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(
        &self,
        name: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, StorageError> {
        if !is_safe_key(name) {
            return Err(StorageError::InvalidKey(name.to_string()));
        }
        let key = self.object_key(name);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes.to_vec()))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(key = %key, error = %e, "S3 upload failed");
                StorageError::Remote(e.to_string())
            })?;

        tracing::debug!(bucket = %self.bucket, key = %key, size = bytes.len(), "Stored upload");
        Ok(format!("{OBJECT_URL_PREFIX}/{key}"))
    }

    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, StorageError> {
        if !is_safe_key(key) || !self.owns_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_no_such_key() {
                    return Ok(None);
                }
                tracing::error!(key = %key, error = %service_error, "S3 download failed");
                return Err(StorageError::Remote(service_error.to_string()));
            }
        };

        let content_type = output
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| guess_content_type(key));
        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Remote(e.to_string()))?
            .into_bytes()
            .to_vec();

        Ok(Some(StoredBlob {
            bytes,
            content_type,
        }))
    }
}
