//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! JSON uses camelCase field names to match the site's client.

pub mod banner;
pub mod contact;
pub mod equipment;
pub mod newsletter;
pub mod process_step;
pub mod project;
pub mod service;
pub mod session;
pub mod testimonial;

use makerslab_core::types::{ContentId, Timestamp};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::{Collection, ContentStore};

/// A content collection managed from the admin panel with full CRUD.
///
/// The associated constants drive the JSON envelope (`{ success, <key>: ... }`)
/// and the wording of error messages, so one set of generic handlers can
/// serve every collection.
pub trait ContentEntity: Serialize + Clone + Send + Sync + Unpin + 'static {
    /// Insert DTO.
    type Create: DeserializeOwned + Clone + Send + Sync + 'static;
    /// Partial-update DTO; `Default` is the empty patch.
    type Update: DeserializeOwned + Default + Send + Sync + 'static;

    /// Entity name used in `NotFound` errors and logs (e.g. `"Service"`).
    const ENTITY: &'static str;
    /// Lower-case noun used in messages (e.g. `"process step"`).
    const LABEL: &'static str;
    /// Envelope key for a single row.
    const ITEM_KEY: &'static str;
    /// Envelope key for a listing.
    const LIST_KEY: &'static str;

    /// The collection holding this entity inside `store`.
    fn collection(store: &dyn ContentStore) -> &dyn Collection<Self>;

    fn id(&self) -> ContentId;

    fn order(&self) -> &str;

    fn created_at(&self) -> Timestamp;

    /// Human-meaningful key used to detect duplicate seed rows.
    fn natural_key(&self) -> &str;

    /// Patch moving any image reference off the legacy asset prefix, or
    /// `None` when the row holds no legacy reference.
    fn legacy_asset_patch(&self) -> Option<Self::Update>;
}
