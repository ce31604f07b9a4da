//! Repository for the `process_steps` table.

use makerslab_core::ordering::sort_by_order;
use makerslab_core::types::ContentId;
use sqlx::PgPool;

use super::TOUCH_UPDATED_AT;
use crate::models::process_step::{CreateProcessStep, ProcessStep, UpdateProcessStep};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, title, description, icon, "order", created_at, updated_at"#;

/// Provides CRUD operations for the "how we work" process steps.
pub struct ProcessStepRepo;

impl ProcessStepRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProcessStep,
    ) -> Result<ProcessStep, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO process_steps (title, description, icon, "order")
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, ProcessStep>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: ContentId,
    ) -> Result<Option<ProcessStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM process_steps WHERE id = $1");
        sqlx::query_as::<_, ProcessStep>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all steps ranked by `order`.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProcessStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM process_steps ORDER BY created_at, id");
        let mut rows = sqlx::query_as::<_, ProcessStep>(&query)
            .fetch_all(pool)
            .await?;
        sort_by_order(&mut rows, |s| &s.order);
        Ok(rows)
    }

    /// Update a step. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ContentId,
        input: &UpdateProcessStep,
    ) -> Result<Option<ProcessStep>, sqlx::Error> {
        let query = format!(
            r#"UPDATE process_steps SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                icon = COALESCE($4, icon),
                "order" = COALESCE($5, "order"),
                {TOUCH_UPDATED_AT}
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, ProcessStep>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a step by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: ContentId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM process_steps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM process_steps")
            .fetch_one(pool)
            .await
    }
}
