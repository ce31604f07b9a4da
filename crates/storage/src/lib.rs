//! Blob storage for uploaded images.
//!
//! Two backends implement [`BlobStore`]:
//!
//! - [`local::LocalBlobStore`] writes under a directory and hands out
//!   `/uploads/<name>` references.
//! - [`s3::S3BlobStore`] writes to an S3 bucket and hands out
//!   `/objects/<prefix>/<name>` references.
//!
//! The reference returned by [`BlobStore::put`] is what content rows store;
//! the API resolves it back through [`BlobStore::get`].

pub mod local;
pub mod s3;

use async_trait::async_trait;

pub use local::LocalBlobStore;
pub use s3::S3BlobStore;

/// Bytes read back from a backend together with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The object name or key would escape the storage root.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote object store rejected or failed the request.
    #[error("Remote storage error: {0}")]
    Remote(String),
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist `bytes` under `name`, returning the reference to store on
    /// content rows. Nothing is left behind when this fails.
    async fn put(&self, name: &str, bytes: &[u8], content_type: &str)
        -> Result<String, StorageError>;

    /// Read the object at `key` (the reference with its route prefix
    /// removed). Returns `None` when no such object exists.
    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, StorageError>;
}

/// MIME type guessed from the extension of `key`.
pub fn guess_content_type(key: &str) -> String {
    mime_guess::from_path(key)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
