//! Repository for the `projects` table.

use makerslab_core::ordering::sort_by_order;
use makerslab_core::types::ContentId;
use sqlx::PgPool;

use super::TOUCH_UPDATED_AT;
use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    r#"id, title, category, description, image_url, tags, "order", created_at, updated_at"#;

/// Provides CRUD operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO projects (title, category, description, image_url, tags, "order")
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.tags)
            .bind(&input.order)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: ContentId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ranked by `order`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at, id");
        let mut rows = sqlx::query_as::<_, Project>(&query).fetch_all(pool).await?;
        sort_by_order(&mut rows, |p| &p.order);
        Ok(rows)
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    /// A supplied `tags` array replaces the stored one wholesale.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ContentId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            r#"UPDATE projects SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url),
                tags = COALESCE($6, tags),
                "order" = COALESCE($7, "order"),
                {TOUCH_UPDATED_AT}
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.tags)
            .bind(&input.order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: ContentId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }
}
