//! Repository for the `newsletter_signups` table.

use sqlx::PgPool;

use crate::models::newsletter::NewsletterSignup;

const COLUMNS: &str = "id, email, created_at";

pub struct NewsletterRepo;

impl NewsletterRepo {
    /// Insert a signup for `email`.
    ///
    /// Returns `None` when the address is already signed up; the unique
    /// constraint decides, so concurrent duplicates cannot both succeed.
    pub async fn create(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<NewsletterSignup>, sqlx::Error> {
        let query = format!(
            "INSERT INTO newsletter_signups (email)
             VALUES ($1)
             ON CONFLICT (email) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsletterSignup>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all signups, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<NewsletterSignup>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM newsletter_signups ORDER BY created_at DESC, id");
        sqlx::query_as::<_, NewsletterSignup>(&query)
            .fetch_all(pool)
            .await
    }
}
