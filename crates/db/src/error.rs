/// Errors raised by [`crate::store::ContentStore`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique natural key is already taken (e.g. a newsletter e-mail).
    #[error("{entity} already exists: {key}")]
    AlreadyExists { entity: &'static str, key: String },

    /// Any driver-level failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
