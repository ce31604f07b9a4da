//! Contact (quote request) submission model and DTO.

use makerslab_core::types::{ContentId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_submissions` table. Never updated.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: ContentId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub description: String,
    pub created_at: Timestamp,
}

/// DTO for a quote request posted from the public site.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    pub description: String,
}
