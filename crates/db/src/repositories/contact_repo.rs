//! Repository for the `contact_submissions` table.

use sqlx::PgPool;

use crate::models::contact::{ContactSubmission, CreateContactSubmission};

const COLUMNS: &str = "id, name, email, phone, budget, timeline, description, created_at";

/// Create-only store of quote requests.
pub struct ContactRepo;

impl ContactRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions (name, email, phone, budget, timeline, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.budget)
            .bind(&input.timeline)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contact_submissions ORDER BY created_at DESC, id");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }
}
