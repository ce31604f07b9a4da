//! Process step model and DTOs.

use makerslab_core::ordering::default_order;
use makerslab_core::types::{ContentId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ContentEntity;
use crate::store::{Collection, ContentStore};

/// A row from the `process_steps` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new process step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessStep {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default = "default_order")]
    pub order: String,
}

/// DTO for updating an existing process step. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcessStep {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: Option<String>,
}

impl ContentEntity for ProcessStep {
    type Create = CreateProcessStep;
    type Update = UpdateProcessStep;

    const ENTITY: &'static str = "ProcessStep";
    const LABEL: &'static str = "process step";
    const ITEM_KEY: &'static str = "step";
    const LIST_KEY: &'static str = "steps";

    fn collection(store: &dyn ContentStore) -> &dyn Collection<Self> {
        store.process_steps()
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

    fn legacy_asset_patch(&self) -> Option<UpdateProcessStep> {
        None
    }
}
