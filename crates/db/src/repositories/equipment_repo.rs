//! Repository for the `equipment` table.

use makerslab_core::ordering::sort_by_order;
use makerslab_core::types::ContentId;
use sqlx::PgPool;

use super::TOUCH_UPDATED_AT;
use crate::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};

const COLUMNS: &str = r#"id, label, spec, image_url, "order", created_at, updated_at"#;

pub struct EquipmentRepo;

impl EquipmentRepo {
    pub async fn create(pool: &PgPool, input: &CreateEquipment) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO equipment (label, spec, image_url, "order")
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(&input.label)
            .bind(&input.spec)
            .bind(&input.image_url)
            .bind(&input.order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: ContentId,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment ORDER BY created_at, id");
        let mut rows = sqlx::query_as::<_, Equipment>(&query)
            .fetch_all(pool)
            .await?;
        sort_by_order(&mut rows, |e| &e.order);
        Ok(rows)
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ContentId,
        input: &UpdateEquipment,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!(
            r#"UPDATE equipment SET
                label = COALESCE($2, label),
                spec = COALESCE($3, spec),
                image_url = CASE WHEN $4 THEN $5 ELSE image_url END,
                "order" = COALESCE($6, "order"),
                {TOUCH_UPDATED_AT}
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(&input.spec)
            .bind(input.image_url.is_some())
            .bind(input.image_url.clone().flatten())
            .bind(&input.order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: ContentId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
            .fetch_one(pool)
            .await
    }
}
