//! Equipment capability model and DTOs.

use makerslab_core::assets::rewrite_optional;
use makerslab_core::ordering::default_order;
use makerslab_core::patch::double_option;
use makerslab_core::types::{ContentId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ContentEntity;
use crate::store::{Collection, ContentStore};

/// A row from the `equipment` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: ContentId,
    pub label: String,
    /// Free-text specification, e.g. a bed size or tolerance.
    pub spec: String,
    pub image_url: Option<String>,
    pub order: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new equipment entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    pub label: String,
    pub spec: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_order")]
    pub order: String,
}

/// DTO for updating an existing equipment entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    pub label: Option<String>,
    pub spec: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub order: Option<String>,
}

impl ContentEntity for Equipment {
    type Create = CreateEquipment;
    type Update = UpdateEquipment;

    const ENTITY: &'static str = "Equipment";
    const LABEL: &'static str = "equipment";
    const ITEM_KEY: &'static str = "equipment";
    const LIST_KEY: &'static str = "equipment";

    fn collection(store: &dyn ContentStore) -> &dyn Collection<Self> {
        store.equipment()
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
        &self.label
    }

    fn legacy_asset_patch(&self) -> Option<UpdateEquipment> {
        rewrite_optional(self.image_url.as_deref()).map(|url| UpdateEquipment {
            image_url: Some(Some(url)),
            ..Default::default()
        })
    }
}
