//! Testimonial model and DTOs.

use makerslab_core::assets::rewrite_optional;
use makerslab_core::ordering::default_order;
use makerslab_core::patch::double_option;
use makerslab_core::types::{ContentId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ContentEntity;
use crate::store::{Collection, ContentStore};

/// A row from the `testimonials` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: ContentId,
    pub quote: String,
    pub author: String,
    pub company: String,
    /// Project label shown under the quote; not a reference to `projects`.
    pub project: String,
    pub avatar_url: Option<String>,
    pub order: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new testimonial.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    pub quote: String,
    pub author: String,
    pub company: String,
    pub project: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_order")]
    pub order: String,
}

/// DTO for updating an existing testimonial. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonial {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub company: Option<String>,
    pub project: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub avatar_url: Option<Option<String>>,
    pub order: Option<String>,
}

impl ContentEntity for Testimonial {
    type Create = CreateTestimonial;
    type Update = UpdateTestimonial;

    const ENTITY: &'static str = "Testimonial";
    const LABEL: &'static str = "testimonial";
    const ITEM_KEY: &'static str = "testimonial";
    const LIST_KEY: &'static str = "testimonials";

    fn collection(store: &dyn ContentStore) -> &dyn Collection<Self> {
        store.testimonials()
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
        &self.author
    }

    fn legacy_asset_patch(&self) -> Option<UpdateTestimonial> {
        rewrite_optional(self.avatar_url.as_deref()).map(|url| UpdateTestimonial {
            avatar_url: Some(Some(url)),
            ..Default::default()
        })
    }
}
