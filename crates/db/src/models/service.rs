//! Service entity model and DTOs.

use makerslab_core::assets::rewrite_optional;
use makerslab_core::ordering::default_order;
use makerslab_core::patch::double_option;
use makerslab_core::types::{ContentId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ContentEntity;
use crate::store::{Collection, ContentStore};

/// A row from the `services` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    /// Symbolic icon name resolved by the site (e.g. `"Zap"`).
    pub icon: String,
    pub image_url: Option<String>,
    pub order: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateService {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_order")]
    pub order: String,
}

/// DTO for updating an existing service. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub order: Option<String>,
}

impl ContentEntity for Service {
    type Create = CreateService;
    type Update = UpdateService;

    const ENTITY: &'static str = "Service";
    const LABEL: &'static str = "service";
    const ITEM_KEY: &'static str = "service";
    const LIST_KEY: &'static str = "services";

    fn collection(store: &dyn ContentStore) -> &dyn Collection<Self> {
        store.services()
    }

    fn id(&self) -> ContentId {
        self.id
    }

    fn order(&self) -> &str {
        &self.order
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn natural_key(&self) -> &str {
        &self.title
    }

    fn legacy_asset_patch(&self) -> Option<UpdateService> {
        rewrite_optional(self.image_url.as_deref()).map(|url| UpdateService {
            image_url: Some(Some(url)),
            ..Default::default()
        })
    }
}
