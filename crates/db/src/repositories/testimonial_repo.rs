//! Repository for the `testimonials` table.

use makerslab_core::ordering::sort_by_order;
use makerslab_core::types::ContentId;
use sqlx::PgPool;

use super::TOUCH_UPDATED_AT;
use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

const COLUMNS: &str =
    r#"id, quote, author, company, project, avatar_url, "order", created_at, updated_at"#;

pub struct TestimonialRepo;

impl TestimonialRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO testimonials (quote, author, company, project, avatar_url, "order")
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.quote)
            .bind(&input.author)
            .bind(&input.company)
            .bind(&input.project)
            .bind(&input.avatar_url)
            .bind(&input.order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: ContentId,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials ORDER BY created_at, id");
        let mut rows = sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await?;
        sort_by_order(&mut rows, |t| &t.order);
        Ok(rows)
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ContentId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            r#"UPDATE testimonials SET
                quote = COALESCE($2, quote),
                author = COALESCE($3, author),
                company = COALESCE($4, company),
                project = COALESCE($5, project),
                avatar_url = CASE WHEN $6 THEN $7 ELSE avatar_url END,
                "order" = COALESCE($8, "order"),
                {TOUCH_UPDATED_AT}
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.quote)
            .bind(&input.author)
            .bind(&input.company)
            .bind(&input.project)
            .bind(input.avatar_url.is_some())
            .bind(input.avatar_url.clone().flatten())
            .bind(&input.order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: ContentId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM testimonials")
            .fetch_one(pool)
            .await
    }
}
