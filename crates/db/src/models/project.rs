//! Portfolio project entity model and DTOs.

use makerslab_core::assets::rewrite_legacy_asset_url;
use makerslab_core::ordering::default_order;
use makerslab_core::types::{ContentId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ContentEntity;
use crate::store::{Collection, ContentStore};

/// A row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ContentId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    /// Display tags, in the order the admin entered them.
    pub tags: Vec<String>,
    pub order: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// The admin panel insists on at least one tag; the store accepts none.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_order")]
    pub order: String,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub order: Option<String>,
}

impl ContentEntity for Project {
    type Create = CreateProject;
    type Update = UpdateProject;

    const ENTITY: &'static str = "Project";
    const LABEL: &'static str = "project";
    const ITEM_KEY: &'static str = "project";
    const LIST_KEY: &'static str = "projects";

    fn collection(store: &dyn ContentStore) -> &dyn Collection<Self> {
        store.projects()
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

    fn legacy_asset_patch(&self) -> Option<UpdateProject> {
        rewrite_legacy_asset_url(&self.image_url).map(|url| UpdateProject {
            image_url: Some(url),
            ..Default::default()
        })
    }
}
