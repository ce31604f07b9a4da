//! Newsletter signup model and DTO.

use makerslab_core::types::{ContentId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `newsletter_signups` table. `email` is unique.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSignup {
    pub id: ContentId,
    pub email: String,
    pub created_at: Timestamp,
}

/// DTO for a newsletter signup.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsletterSignup {
    pub email: String,
}
